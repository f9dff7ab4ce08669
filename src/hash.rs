/*
 * Copyright (c) 2024 K--Aethiax
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * Alternatively, the contents of this file may be used under the terms of
 * the MIT license as described below.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use super::*;
use core::fmt;

/// Number of key bytes read. Longer keys are accepted, the excess is ignored.
pub const KEY_LEN: usize = 8;
/// Digest size in bytes.
pub const DIGEST_LEN: usize = 4;

const C_ROUNDS: usize = 2;
const D_ROUNDS: usize = 4;

/// ``"lyge"`` and ``"tedb"``, the low halves of SipHash's `v2` and `v3` constants.
const INIT_V2: u32 = 0x6c796765;
const INIT_V3: u32 = 0x74656462;

#[derive(Clone, Copy, PartialEq, Eq)]
struct State {
    v0: u32,
    v1: u32,
    v2: u32,
    v3: u32,
}

impl State {
    #[inline(always)]
    const fn new(k0: u32, k1: u32) -> Self {
        Self {
            v0: k0,
            v1: k1,
            v2: INIT_V2 ^ k0,
            v3: INIT_V3 ^ k1,
        }
    }

    #[inline(always)]
    fn sip_round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(5);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(16);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(8);
        self.v3 ^= self.v2;

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(7);
        self.v3 ^= self.v0;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(16);
    }

    #[inline(always)]
    fn compress(&mut self, m: u32) {
        self.v3 ^= m;
        for _ in 0..C_ROUNDS {
            self.sip_round();
        }
        self.v0 ^= m;
    }

    /// `tail` holds the 0..=3 bytes past the last full word, `tot_len` counts the whole message.
    #[inline(always)]
    fn finish(mut self, tail: &[u8], tot_len: u64) -> u32 {
        self.compress(last_word(tail, tot_len));
        self.v2 ^= 0xff;
        for _ in 0..D_ROUNDS {
            self.sip_round();
        }
        self.v1 ^ self.v3
    }
}

/// Tail bytes in the low positions, low 8 bits of the message length on top.
#[inline(always)]
fn last_word(tail: &[u8], tot_len: u64) -> u32 {
    debug_assert!(tail.len() < 4);
    let mut last = [0; 4];
    last[..tail.len()].copy_from_slice(tail);
    last[3] = tot_len as u8;
    u32::from_le_bytes(last)
}

#[inline]
fn read_key(key: &[u8]) -> Result<(u32, u32), InvalidKeyLength> {
    match key.first_chunk::<KEY_LEN>() {
        Some(k) => Ok((read_u32(&k[0..4]), read_u32(&k[4..8]))),
        None => Err(InvalidKeyLength::new(key.len())),
    }
}

#[inline(always)]
fn base_hash(k0: u32, k1: u32, bytes: &[u8]) -> u32 {
    let mut state = State::new(k0, k1);

    let words = bytes.chunks_exact(4);
    let tail = words.remainder();
    for word in words {
        state.compress(read_u32(word));
    }

    state.finish(tail, bytes.len() as u64)
}

/// One-shot HalfSipHash-2-4 with a byte key.
///
/// Only the first [`KEY_LEN`] bytes of `key` are used. Fails if `key` is shorter.
#[inline]
pub fn hash(key: &[u8], bytes: &[u8]) -> Result<[u8; DIGEST_LEN], InvalidKeyLength> {
    let (k0, k1) = read_key(key)?;
    Ok(base_hash(k0, k1, bytes).to_le_bytes())
}

/// One-shot HalfSipHash-2-4 with the key already split into its two little-endian words.
///
/// Returns the digest as a word; `.to_le_bytes()` gives the same bytes as [`hash`].
#[inline]
pub fn hash_with_keys(k0: u32, k1: u32, bytes: &[u8]) -> u32 {
    base_hash(k0, k1, bytes)
}

/// Streamed HalfSipHash-2-4 hasher.
///
/// Feed data with [`update`](Hasher::update) in chunks of any size; the digest does not
/// depend on how the message was split. [`finalize`](Hasher::finalize) consumes the hasher,
/// so a finished state can never be fed again. Clone it first, or [`reset`](Hasher::reset)
/// it, to hash another message under the same key.
#[derive(Clone)]
pub struct Hasher {
    buffer: [u8; 4],
    buffered_len: usize,
    tot_len: u64,

    state: State,
    key: (u32, u32),
}

impl Hasher {
    /// Creates a hasher keyed with the first [`KEY_LEN`] bytes of `key`.
    pub fn new(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        let (k0, k1) = read_key(key)?;
        Ok(Self::with_keys(k0, k1))
    }

    /// Creates a hasher from the two little-endian key words.
    pub const fn with_keys(k0: u32, k1: u32) -> Self {
        Self {
            buffer: [0; 4],
            buffered_len: 0,
            tot_len: 0,
            state: State::new(k0, k1),
            key: (k0, k1),
        }
    }

    /// Drops everything fed so far, keeping the key.
    pub fn reset(&mut self) {
        *self = Self::with_keys(self.key.0, self.key.1);
    }

    /// Absorbs `bytes`. Bytes that do not complete a word wait in the buffer.
    pub fn update(&mut self, mut bytes: &[u8]) {
        if self.buffered_len > 0 {
            let off = self.buffered_len;
            let this_len = bytes.len().min(4 - off);
            self.buffer[off..off + this_len].copy_from_slice(&bytes[..this_len]);
            self.buffered_len += this_len;
            if self.buffered_len < 4 {
                return;
            }

            self.state.compress(u32::from_le_bytes(self.buffer));
            self.tot_len = self.tot_len.wrapping_add(4);
            self.buffered_len = 0;
            bytes = &bytes[this_len..];
        }

        let mut state = self.state;
        let words = bytes.chunks_exact(4);
        let remainder = words.remainder();
        for word in words {
            state.compress(read_u32(word));
            self.tot_len = self.tot_len.wrapping_add(4);
        }
        self.state = state;

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered_len = remainder.len();
    }

    /// Digest word of everything fed so far, without consuming the hasher.
    pub fn finish_u32(&self) -> u32 {
        let tot_len = self.tot_len.wrapping_add(self.buffered_len as u64);
        self.state.finish(&self.buffer[..self.buffered_len], tot_len)
    }

    /// Finishes the stream and returns the 4-byte little-endian digest.
    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        self.finish_u32().to_le_bytes()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("halfsiphash::Hasher { ... }")
    }
}

/// `finish` zero-extends the 32-bit digest.
impl core::hash::Hasher for Hasher {
    fn finish(&self) -> u64 {
        self.finish_u32() as u64
    }
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }
}

/// Builds [`Hasher`]s sharing one key, for keying `HashMap` and friends.
#[derive(Clone, Copy)]
pub struct KeyedBuildHasher {
    k0: u32,
    k1: u32,
}

impl KeyedBuildHasher {
    /// Keyed with the first [`KEY_LEN`] bytes of `key`.
    pub fn new(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        let (k0, k1) = read_key(key)?;
        Ok(Self::with_keys(k0, k1))
    }

    /// Keyed with the two little-endian key words.
    pub const fn with_keys(k0: u32, k1: u32) -> Self {
        Self { k0, k1 }
    }
}

impl core::hash::BuildHasher for KeyedBuildHasher {
    type Hasher = Hasher;

    fn build_hasher(&self) -> Hasher {
        Hasher::with_keys(self.k0, self.k1)
    }
}

impl fmt::Debug for KeyedBuildHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("halfsiphash::KeyedBuildHasher { ... }")
    }
}
