use crate::core::codec::XorCodec;
use crate::domain::model::Pairing;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Persists pairings through a `Storage` backend: serialize with
/// serde_json, obfuscate with the XOR codec, write; load is the reverse.
pub struct PairingStore<S: Storage> {
    storage: S,
    codec: XorCodec,
}

impl<S: Storage> PairingStore<S> {
    pub fn new(storage: S, codec: XorCodec) -> Self {
        Self { storage, codec }
    }

    pub async fn save(&self, path: &str, pairing: &Pairing) -> Result<()> {
        let serialized = serde_json::to_vec(pairing)?;
        let encoded = self.codec.transform(&serialized);

        tracing::debug!("Writing {} encoded bytes to {}", encoded.len(), path);
        self.storage.write_file(path, &encoded).await
    }

    pub async fn load(&self, path: &str) -> Result<Pairing> {
        let encoded = self.storage.read_file(path).await?;
        let serialized = self.codec.transform(&encoded);

        let pairing = serde_json::from_slice(&serialized)?;
        Ok(pairing)
    }
}
