use std::io::{
    Read,
    Write,
};

use log::debug;

use crate::{
    Creature,
    CreatureError,
};

impl Creature {
    /// Serializes the Mon as YAML, which is easy for people to read and edit by hand.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CreatureError> {
        serde_yaml::to_string(self)
            .map(String::into_bytes)
            .map_err(CreatureError::Serialize)
    }

    /// Deserializes a Mon from YAML.
    ///
    /// Derived fields are taken as written and are not recalculated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CreatureError> {
        serde_yaml::from_slice(bytes).map_err(CreatureError::Parse)
    }

    /// Writes the Mon as YAML to the given sink.
    pub fn save<W>(&self, mut writer: W) -> Result<(), CreatureError>
    where
        W: Write,
    {
        let bytes = self.to_bytes()?;
        writer
            .write_all(&bytes)
            .map_err(|err| CreatureError::io("failed to write mon", err))?;
        debug!("Saved {} ({} bytes)", self.id, bytes.len());
        Ok(())
    }

    /// Reads a Mon from the given source until exhaustion.
    ///
    /// The reader is not closed.
    pub fn load<R>(mut reader: R) -> Result<Self, CreatureError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|err| CreatureError::io("failed to read mon", err))?;
        let creature = Self::from_bytes(&bytes)?;
        debug!("Loaded {} at level {}", creature.id, creature.level);
        Ok(creature)
    }
}
