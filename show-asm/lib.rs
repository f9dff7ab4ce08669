#[inline(never)]
pub fn hash_oneshot(bytes: &[u8], k0: u32, k1: u32) -> u32 {
    halfsiphash::hash_with_keys(k0, k1, bytes)
}

#[inline(never)]
pub fn hash_streamed(bytes: &[u8], k0: u32, k1: u32) -> u32 {
    let mut hasher = halfsiphash::Hasher::with_keys(k0, k1);
    hasher.update(bytes);
    hasher.finish_u32()
}

#[inline(never)]
pub fn rapidhash(bytes: &[u8], seed: u64) -> u64 {
    rapidhash::rapidhash_inline(bytes, seed)
}
