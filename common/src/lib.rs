pub mod file_format;
pub mod log_setup;

pub use file_format::{
    deserialize, get_file_extension, serialize, FileExtensionError, FileFormat, FileFormatResult,
    SerdeFormatError, SerdeFormatResult,
};
