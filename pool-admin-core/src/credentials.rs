//! Credential generation
//!
//! Client identifiers, client secrets and temporary passwords are drawn
//! from the operating system CSPRNG through `rand`'s uniform sampling and
//! shuffle. There is no fallback: if the entropy source fails, generation
//! fails with [`ConsoleError::EntropyUnavailable`].

use rand::rngs::OsRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{RngCore, TryRngCore};

use crate::error::{ConsoleError, ConsoleResult};

/// Alphabet of the random part of a client identifier
pub const CLIENT_ID_CHARSET: &[u8] = b"abcdef0123456789";
/// Prefix of generated client identifiers
pub const CLIENT_ID_PREFIX: &str = "conf";
/// Length of the random part of a client identifier
pub const CLIENT_ID_LENGTH: usize = 8;

/// Alphabet of client secrets
pub const SECRET_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_~.";
/// Client secret length
pub const SECRET_LENGTH: usize = 48;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
/// Symbols allowed in temporary passwords
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";
/// Temporary password length
pub const PASSWORD_LENGTH: usize = 16;

/// Attempts before giving up on finding an unused client identifier
const MAX_ID_ATTEMPTS: usize = 16;

/// Source of random bytes
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> ConsoleResult<()>;
}

/// Operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> ConsoleResult<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            log::error!("OS random source failed: {e}");
            ConsoleError::EntropyUnavailable(e.to_string())
        })
    }
}

/// Exposes an [`EntropySource`] as an infallible `RngCore`.
///
/// The first failure is kept and every later draw yields zeros without
/// touching the source again; [`EntropyRng::finish`] reports it, so a
/// value sampled after a failure is never handed out.
struct EntropyRng<'a, E: EntropySource> {
    source: &'a mut E,
    error: Option<ConsoleError>,
}

impl<'a, E: EntropySource> EntropyRng<'a, E> {
    fn new(source: &'a mut E) -> Self {
        Self {
            source,
            error: None,
        }
    }

    fn finish(self) -> ConsoleResult<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<E: EntropySource> RngCore for EntropyRng<'_, E> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if self.error.is_some() {
            dst.fill(0);
            return;
        }
        if let Err(e) = self.source.fill(dst) {
            dst.fill(0);
            self.error = Some(e);
        }
    }
}

/// Credential generator over an entropy source
#[derive(Debug, Default)]
pub struct CredentialGenerator<E: EntropySource = OsEntropy> {
    entropy: E,
}

impl CredentialGenerator<OsEntropy> {
    pub fn os() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> CredentialGenerator<E> {
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Runs `draw` against the entropy source, failing if any read failed
    fn sample<T>(&mut self, draw: impl FnOnce(&mut EntropyRng<'_, E>) -> T) -> ConsoleResult<T> {
        let mut rng = EntropyRng::new(&mut self.entropy);
        let value = draw(&mut rng);
        rng.finish().map(|()| value)
    }

    /// Fixed-length string drawn uniformly from `charset`
    pub fn random_string(&mut self, charset: &[u8], length: usize) -> ConsoleResult<String> {
        if charset.is_empty() {
            return Err(ConsoleError::Validation("empty character set".into()));
        }
        self.sample(|rng| {
            (0..length)
                .filter_map(|_| charset.choose(rng).copied().map(char::from))
                .collect()
        })
    }

    /// `conf-` followed by eight lowercase hex characters
    pub fn client_id(&mut self) -> ConsoleResult<String> {
        let suffix = self.random_string(CLIENT_ID_CHARSET, CLIENT_ID_LENGTH)?;
        Ok(format!("{CLIENT_ID_PREFIX}-{suffix}"))
    }

    /// Client identifier not rejected by `is_taken`
    pub fn unique_client_id<F>(&mut self, is_taken: F) -> ConsoleResult<String>
    where
        F: Fn(&str) -> bool,
    {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.client_id()?;
            if !is_taken(&id) {
                return Ok(id);
            }
            log::debug!("Generated client id {id} already in use, retrying");
        }
        Err(ConsoleError::DuplicateIdentifier(format!(
            "no free client id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    pub fn client_secret(&mut self) -> ConsoleResult<String> {
        self.random_string(SECRET_CHARSET, SECRET_LENGTH)
    }

    /// 16-character password with at least one upper, lower, digit and
    /// symbol, shuffled
    pub fn temporary_password(&mut self) -> ConsoleResult<String> {
        let all: Vec<u8> = [UPPER, LOWER, DIGITS, SYMBOLS].concat();

        self.sample(|rng| {
            let mut chars: Vec<u8> = [UPPER, LOWER, DIGITS, SYMBOLS]
                .iter()
                .filter_map(|set| set.choose(rng).copied())
                .collect();
            let rest = PASSWORD_LENGTH - chars.len();
            chars.extend((0..rest).filter_map(|_| all.choose(rng).copied()));
            chars.shuffle(rng);
            chars.into_iter().map(char::from).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingEntropy, SequenceEntropy};

    #[test]
    fn client_id_shape() {
        let mut generator = CredentialGenerator::os();
        let id = generator.client_id().unwrap();
        assert!(id.starts_with("conf-"));
        let suffix = &id[5..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.bytes().all(|b| CLIENT_ID_CHARSET.contains(&b)));
    }

    #[test]
    fn secret_shape() {
        let secret = CredentialGenerator::os().client_secret().unwrap();
        assert_eq!(secret.len(), 48);
        assert!(secret.bytes().all(|b| SECRET_CHARSET.contains(&b)));
    }

    #[test]
    fn password_has_every_class() {
        let mut generator = CredentialGenerator::os();
        for _ in 0..50 {
            let pwd = generator.temporary_password().unwrap();
            assert_eq!(pwd.len(), PASSWORD_LENGTH);
            assert!(pwd.bytes().any(|b| b.is_ascii_uppercase()));
            assert!(pwd.bytes().any(|b| b.is_ascii_lowercase()));
            assert!(pwd.bytes().any(|b| b.is_ascii_digit()));
            assert!(pwd.bytes().any(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn failing_source_is_reported() {
        let mut generator = CredentialGenerator::new(FailingEntropy);
        assert!(matches!(
            generator.client_secret(),
            Err(ConsoleError::EntropyUnavailable(_))
        ));
        assert!(matches!(
            generator.temporary_password(),
            Err(ConsoleError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn same_bytes_give_same_string() {
        let values: Vec<u32> = (0..16).map(|i| i * 0x1111_1111).collect();
        let a = CredentialGenerator::new(SequenceEntropy::new(values.clone()))
            .random_string(CLIENT_ID_CHARSET, 8)
            .unwrap();
        let b = CredentialGenerator::new(SequenceEntropy::new(values))
            .random_string(CLIENT_ID_CHARSET, 8)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn exhausted_source_fails_instead_of_padding() {
        let mut generator = CredentialGenerator::new(SequenceEntropy::new(vec![1, 2]));
        assert!(matches!(
            generator.client_secret(),
            Err(ConsoleError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn unique_client_id_retries_on_collision() {
        let rejected = std::cell::RefCell::new(None::<String>);
        let mut generator = CredentialGenerator::os();
        let id = generator
            .unique_client_id(|id| {
                let mut first = rejected.borrow_mut();
                match first.as_deref() {
                    None => {
                        *first = Some(id.to_string());
                        true
                    }
                    Some(seen) => seen == id,
                }
            })
            .unwrap();
        let first = rejected.into_inner().unwrap();
        assert_ne!(id, first);
        assert!(id.starts_with("conf-"));
    }

    #[test]
    fn unique_client_id_gives_up_eventually() {
        let mut generator = CredentialGenerator::os();
        assert!(matches!(
            generator.unique_client_id(|_| true),
            Err(ConsoleError::DuplicateIdentifier(_))
        ));
    }

    #[test]
    fn empty_charset_is_rejected() {
        let mut generator = CredentialGenerator::os();
        assert!(generator.random_string(b"", 3).is_err());
    }
}
