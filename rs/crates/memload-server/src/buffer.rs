use rand::RngCore;
use sha1::{Digest, Sha1};

/// Size of every generated buffer: 1 MiB.
pub const BUFFER_SIZE: usize = 1024 * 1024;

/// Where buffer contents come from. The bytes only need to be unpredictable,
/// not cryptographically strong.
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Default source: the calling thread's OS-seeded generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl EntropySource for ThreadRngSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        rand::thread_rng().try_fill_bytes(dest)
    }
}

/// A fixed-size block of random bytes. Immutable once generated.
pub struct Buffer {
    data: Box<[u8]>,
}

impl Buffer {
    /// Allocate [`BUFFER_SIZE`] bytes and fill them from `source`.
    pub fn random(source: &dyn EntropySource) -> Result<Self, rand::Error> {
        let mut data = vec![0u8; BUFFER_SIZE].into_boxed_slice();
        source.fill(&mut data)?;
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// SHA-1 of the contents, lowercase hex (40 chars).
    pub fn digest(&self) -> String {
        format!("{:x}", Sha1::digest(&self.data))
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer").field("len", &self.data.len()).finish()
    }
}
