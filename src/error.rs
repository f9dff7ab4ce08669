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

use crate::KEY_LEN;
use core::fmt;

/// The key passed to [`Hasher::new`](crate::Hasher::new) or [`hash`](crate::hash)
/// was shorter than [`KEY_LEN`] bytes.
///
/// Raised before any hashing state is set up. Supply a longer key and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeyLength {
    len: usize,
}

impl InvalidKeyLength {
    #[inline]
    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected key, in bytes.
    #[inline]
    pub const fn key_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key length: {} bytes, expected at least {}", self.len, KEY_LEN)
    }
}

impl core::error::Error for InvalidKeyLength {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn display_message() {
        assert_eq!(
            InvalidKeyLength::new(3).to_string(),
            "invalid key length: 3 bytes, expected at least 8"
        );
    }

    #[test]
    fn reports_rejected_length() {
        for len in 0..KEY_LEN {
            let key = [0u8; KEY_LEN];
            let err = crate::Hasher::new(&key[..len]).unwrap_err();
            assert_eq!(err.key_len(), len);
            assert_eq!(crate::hash(&key[..len], b"").unwrap_err(), err);
        }
    }

    #[test]
    fn error_trait_impl() {
        use core::error::Error;

        let err = InvalidKeyLength::new(0);
        assert!(err.source().is_none());
    }
}
