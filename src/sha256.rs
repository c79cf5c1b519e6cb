use tracing::debug;

use crate::render::Digest;

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a finished digest in bytes.
pub const DIGEST_LEN: usize = 32;

const H_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K_CONST: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 over a complete message held in memory.
///
/// The whole message is padded and compressed in one go, there is no
/// streaming interface.
pub struct Sha256 {
    h: [u32; 8],
}

/// Computes the SHA-256 digest of `message`.
pub fn digest(message: &[u8]) -> Digest {
    Sha256::digest(message)
}

/// Pads `message` to a whole number of blocks: a single `0x80` byte, zeros
/// up to 56 mod 64, then the message length in bits as a big-endian `u64`.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let zeros = (BLOCK_LEN + 55 - message.len() % BLOCK_LEN) % BLOCK_LEN;
    let mut data = Vec::with_capacity(message.len() + 1 + zeros + 8);
    data.extend_from_slice(message);
    data.push(0x80);
    data.resize(data.len() + zeros, 0x00);
    data.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(data.len() % BLOCK_LEN, 0);
    data
}

impl Sha256 {
    fn new() -> Sha256 {
        Self { h: H_INIT }
    }

    /// Computes the SHA-256 digest of `message`.
    pub fn digest(message: &[u8]) -> Digest {
        let padded = pad(message);
        debug!(
            message_len = message.len(),
            blocks = padded.len() / BLOCK_LEN,
            "hashing message"
        );

        let mut sha = Sha256::new();
        for chunk in padded.chunks_exact(BLOCK_LEN) {
            let mut block = [0u32; 16];
            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
                *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            }
            sha.process_block(&block);
        }

        sha.finish()
    }

    fn process_block(&mut self, message: &[u32; 16]) {
        let mut w = [0u32; 64];
        w[..16].copy_from_slice(message);

        for t in 16..64 {
            w[t] = Sha256::ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(Sha256::ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;

        for t in 0..64 {
            let t1 = h
                .wrapping_add(Sha256::bsig1(e))
                .wrapping_add(Sha256::ch(e, f, g))
                .wrapping_add(K_CONST[t])
                .wrapping_add(w[t]);
            let t2 = Sha256::bsig0(a).wrapping_add(Sha256::maj(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (state, v) in self.h.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *state = state.wrapping_add(v);
        }
    }

    // region internal sha256 functions

    fn ch(x: u32, y: u32, z: u32) -> u32 {
        (x & y) ^ (!x & z)
    }

    fn maj(x: u32, y: u32, z: u32) -> u32 {
        (x & y) ^ (x & z) ^ (y & z)
    }

    fn bsig0(x: u32) -> u32 {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    fn bsig1(x: u32) -> u32 {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    fn ssig0(x: u32) -> u32 {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    fn ssig1(x: u32) -> u32 {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }

    // endregion

    fn finish(&self) -> Digest {
        let mut output = [0u8; DIGEST_LEN];
        for (chunk, v) in output.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        Digest::from(output)
    }
}
