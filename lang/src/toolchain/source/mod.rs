pub mod source_buffer;

pub use source_buffer::{SourceBuffer, SourceError};

/// Builds an in-memory [SourceBuffer] named after the location of the macro call, so diagnostics
/// raised against it point back at the test that created it.
#[macro_export]
macro_rules! minipas {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            $crate::const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
