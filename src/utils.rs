pub mod is_gzip_path;
pub mod normalize_security_name;

pub use is_gzip_path::is_gzip_path;
pub use normalize_security_name::normalize_security_name;
