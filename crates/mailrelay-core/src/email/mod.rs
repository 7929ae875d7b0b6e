/// Email repackaging modules
pub mod attachment;
pub mod composer;
pub mod parser;

pub use attachment::attachment_filename;
pub use composer::ForwardingComposer;
pub use parser::HeaderSet;
