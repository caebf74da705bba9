mod properties;
mod secret;
mod source;

pub use properties::read_properties;
pub use secret::{SecretConfigSource, DEFAULT_SECRET_LOCATION, SECRET_PATH_ENV};
pub use source::{
    ConfigSource, EnvConfigSource, LayeredConfig, CONFIG_ORDINAL_KEY, DEFAULT_ORDINAL,
};
