//! Initialization vector sources
//!
//! Every encryption draws a fresh IV from an [`IvSource`] handed to the
//! [`PasswordCipher`](crate::PasswordCipher). Three sources ship:
//!
//! - [`ProcessIvSource`] (default): a single process-wide `SmallRng`, seeded
//!   once from the system clock and process id on first use. This keeps the
//!   historical behavior, and it is **not** a cryptographic generator: an
//!   observer who can guess the start time can predict every IV.
//! - [`OsIvSource`]: reads the operating system CSPRNG. Use this in
//!   production. Ciphertexts stay wire-compatible; only IV quality changes.
//! - [`SeededIvSource`]: ChaCha20 from a caller seed, for reproducible
//!   vectors and tests.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::OnceCell;
use rand::rngs::{OsRng, SmallRng};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use pwcrypt_algorithms::types::Iv;

/// Something that hands out IVs, one per encryption
pub trait IvSource: Send + Sync {
    /// Short name, for logs
    fn name(&self) -> &'static str;

    /// Produce the IV for the next message
    fn next_iv(&self) -> Result<Iv>;
}

impl<S: IvSource + ?Sized> IvSource for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_iv(&self) -> Result<Iv> {
        (**self).next_iv()
    }
}

impl<S: IvSource + ?Sized> IvSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_iv(&self) -> Result<Iv> {
        (**self).next_iv()
    }
}

static PROCESS_RNG: OnceCell<Mutex<SmallRng>> = OnceCell::new();

/// Seed for the process-wide generator: wall clock nanoseconds mixed with
/// the process id
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ (u64::from(std::process::id()) << 32)
}

/// Handle to the process-wide, lazily seeded IV generator
///
/// All handles share one generator. It is seeded exactly once, by whichever
/// thread asks first; `OnceCell` makes concurrent first calls wait for that
/// single initialization instead of racing to seed twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIvSource;

impl ProcessIvSource {
    /// Creates a handle; the generator itself is seeded on first use
    pub const fn new() -> Self {
        Self
    }

    /// Whether the shared generator has been seeded yet
    pub fn is_seeded() -> bool {
        PROCESS_RNG.get().is_some()
    }

    fn generator() -> &'static Mutex<SmallRng> {
        PROCESS_RNG.get_or_init(|| {
            log::debug!("seeding process-wide IV generator from the system clock");
            Mutex::new(SmallRng::seed_from_u64(clock_seed()))
        })
    }
}

impl IvSource for ProcessIvSource {
    fn name(&self) -> &'static str {
        "process SmallRng"
    }

    fn next_iv(&self) -> Result<Iv> {
        let mut rng = Self::generator().lock().map_err(|_| Error::RandomGeneration {
            context: "process IV generator lock poisoned",
        })?;
        Iv::random(&mut *rng)
    }
}

/// IVs from the operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsIvSource;

impl IvSource for OsIvSource {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn next_iv(&self) -> Result<Iv> {
        Iv::random(&mut OsRng).map_err(|e| {
            log::warn!("operating system RNG failed: {}", e);
            e.with_context("OsRng")
        })
    }
}

/// Deterministic IVs from a ChaCha20 stream
#[derive(Debug)]
pub struct SeededIvSource {
    rng: Mutex<ChaCha20Rng>,
}

impl SeededIvSource {
    /// Creates a source whose IV sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl IvSource for SeededIvSource {
    fn name(&self) -> &'static str {
        "seeded ChaCha20"
    }

    fn next_iv(&self) -> Result<Iv> {
        let mut rng = self.rng.lock().map_err(|_| Error::RandomGeneration {
            context: "seeded IV generator lock poisoned",
        })?;
        Iv::random(&mut *rng)
    }
}
