/// Key phrase used by the historical tool; kept as the default so existing
/// pairings files stay readable.
pub const DEFAULT_KEY_PHRASE: &str = "happy christmas";

/// Repeating-key XOR over the input bytes. Involutive: applying the same
/// codec twice returns the original input. This is obfuscation, not
/// encryption; it only keeps assignments out of casual view on disk.
#[derive(Debug, Clone)]
pub struct XorCodec {
    key: Vec<u8>,
}

impl Default for XorCodec {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PHRASE)
    }
}

impl XorCodec {
    pub fn new(key_phrase: &str) -> Self {
        Self {
            key: key_phrase.as_bytes().to_vec(),
        }
    }

    pub fn transform(&self, data: &[u8]) -> Vec<u8> {
        if self.key.is_empty() {
            return data.to_vec();
        }

        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key_byte)| byte ^ key_byte)
            .collect()
    }
}
