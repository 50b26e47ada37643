mod env;

pub(crate) use env::get_env_with_prefix;
