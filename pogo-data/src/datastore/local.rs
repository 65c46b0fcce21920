use std::{
    env,
    fs::File,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};

use crate::Catalog;

impl Catalog {
    /// Environment variable read by [`Catalog::open_from_env_default`].
    pub const DEFAULT_PATH_ENV_VAR: &str = "GAMEMASTER_PATH";

    /// Reads the gamemaster file at the given path.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("{} could not be opened", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("failed to read gamemaster from {}", path.display()))
    }

    /// Reads the gamemaster file at the path stored in the given environment variable.
    pub fn open_from_env(env_var: &str) -> Result<Self> {
        Self::open(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Reads the gamemaster file at the path stored in [`Self::DEFAULT_PATH_ENV_VAR`].
    pub fn open_from_env_default() -> Result<Self> {
        Self::open_from_env(Self::DEFAULT_PATH_ENV_VAR)
    }
}
