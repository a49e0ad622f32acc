//! HMAC key material resolution for JWT signing and verification

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::errors::KeyError;

/// Symmetric key usable for both signing and verification
#[derive(Clone)]
pub struct SigningKey {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    bits: usize,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &self.bits)
            .finish()
    }
}

impl SigningKey {
    /// Resolves a raw secret into a key for `algorithm`
    ///
    /// # Arguments
    ///
    /// * `secret` - The raw shared secret
    /// * `algorithm` - One of HS256, HS384 or HS512
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Secret meets the algorithm's minimum size
    /// * `Err(KeyError::WeakKey)` - Secret is shorter than the hash output
    /// * `Err(KeyError::UnsupportedAlgorithm)` - Algorithm is not HMAC
    pub fn resolve(secret: &[u8], algorithm: Algorithm) -> Result<Self, KeyError> {
        let required_bits = minimum_key_bits(algorithm)?;
        let bits = secret.len() * 8;
        if bits < required_bits {
            return Err(KeyError::WeakKey {
                required_bits,
                actual_bits: bits,
            });
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            bits,
        })
    }

    /// Resolves a secret using the strongest HMAC algorithm its length allows
    pub fn strongest_for(secret: &[u8]) -> Result<Self, KeyError> {
        let bits = secret.len() * 8;
        let algorithm = if bits >= 512 {
            Algorithm::HS512
        } else if bits >= 384 {
            Algorithm::HS384
        } else {
            Algorithm::HS256
        };
        Self::resolve(secret, algorithm)
    }

    /// Algorithm this key signs with
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Size of the secret in bits
    pub fn bits(&self) -> usize {
        self.bits
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Minimum secret size in bits, equal to the HMAC hash output size
pub fn minimum_key_bits(algorithm: Algorithm) -> Result<usize, KeyError> {
    match algorithm {
        Algorithm::HS256 => Ok(256),
        Algorithm::HS384 => Ok(384),
        Algorithm::HS512 => Ok(512),
        other => Err(KeyError::UnsupportedAlgorithm {
            algorithm: format!("{:?}", other),
        }),
    }
}
