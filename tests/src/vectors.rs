//! Known-answer vectors shared by the integration suites
//!
//! AES-128 vectors are from FIPS-197 (Appendix B and C.1) plus the
//! zero-padded "Hello World!" block. SHA-256 vectors are from FIPS 180-2
//! and cover the padding boundaries at 55, 56 and 64 bytes.

/// One AES-128 encryption
pub struct AesVector {
    /// Key, hex
    pub key: &'static str,
    /// Plaintext block, hex
    pub plaintext: &'static str,
    /// Ciphertext block, hex
    pub ciphertext: &'static str,
}

/// One SHA-256 digest
pub struct Sha256Vector {
    /// Message bytes
    pub message: &'static [u8],
    /// Digest, hex
    pub digest: &'static str,
}

/// AES-128 known answers
pub const AES128_VECTORS: &[AesVector] = &[
    AesVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    AesVector {
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    AesVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "48656c6c6f20576f726c642100000000",
        ciphertext: "3852873fbef952fc1374337e790b5f81",
    },
];

/// SHA-256 known answers
pub const SHA256_VECTORS: &[Sha256Vector] = &[
    Sha256Vector {
        message: b"",
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    Sha256Vector {
        message: b"abc",
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Sha256Vector {
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    Sha256Vector {
        message: b"Hello World!",
        digest: "7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069",
    },
    Sha256Vector {
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    },
    Sha256Vector {
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
    },
    Sha256Vector {
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    },
];
