use crate::page::compositor::ComposedPage;

/// 128-bit digest of a composed page, stable across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl std::fmt::Display for PageFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest the JSON form of every section, in page order.
///
/// Object keys serialize in sorted order, so equal pages give equal digests.
pub fn fingerprint_page(page: &ComposedPage<'_>) -> PageFingerprint {
    let mut digest = Digest::new();
    digest.frame(&(page.sections.len() as u64).to_le_bytes());
    for section in &page.sections {
        digest.frame(section.id().as_bytes());
        match serde_json::to_vec(section) {
            Ok(bytes) => digest.frame(&bytes),
            Err(_) => digest.frame(&[0xff]),
        }
    }
    digest.finish()
}

const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Two FNV-1a lanes with distinct offsets, fed the same length-prefixed frames.
struct Digest {
    lanes: [u64; 2],
}

impl Digest {
    fn new() -> Self {
        Self {
            lanes: [0xcbf2_9ce4_8422_2325, 0x9ae1_6a3b_2f90_404f],
        }
    }

    fn frame(&mut self, bytes: &[u8]) {
        self.absorb(&(bytes.len() as u64).to_le_bytes());
        self.absorb(bytes);
    }

    fn absorb(&mut self, bytes: &[u8]) {
        for lane in &mut self.lanes {
            *lane = bytes
                .iter()
                .fold(*lane, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        }
    }

    fn finish(self) -> PageFingerprint {
        let [hi, lo] = self.lanes;
        PageFingerprint { hi, lo }
    }
}
