//! Friendly share codes. A run is replayable from a code like
//! `RF-STACK42`: one word from a fixed 64-entry list plus two digits,
//! hashed into the 64-bit seed with a domain prefix so the same code
//! always opens the same thirty days.

use thiserror::Error;

pub const CODE_PREFIX: &str = "RF-";

const SEED_DOMAIN: &[u8] = b"refactor.seed.v1";

#[rustfmt::skip]
const WORD_LIST: [&str; 64] = [
    "ARRAY", "BADGE", "BEAT", "BINARY", "BOOT", "BRANCH", "BUFFER", "BUILD",
    "CACHE", "CADET", "CHIEF", "CODE", "COFFEE", "COMMIT", "CURFEW", "CURSOR",
    "DEBUG", "DECAF", "DESK", "DIFF", "DINER", "DOCKET", "DONUT", "DUTY",
    "ERROR", "FELONY", "FETCH", "GRID", "GRIND", "HASH", "HOTFIX", "INDEX",
    "INTEL", "KERNEL", "LAMBDA", "LEDGER", "LINTER", "LOCKER", "LOOP", "MACRO",
    "MERGE", "MUG", "NIGHT", "PAROLE", "PATCH", "PATROL", "PIXEL", "POINTER",
    "RADIO", "REBASE", "RECORD", "REPO", "ROOKIE", "ROSTER", "SCRIPT", "SHIFT",
    "SIREN", "SQUAD", "STACK", "STATIC", "SYNTAX", "TICKET", "TOKEN", "VECTOR",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("share codes start with {CODE_PREFIX}")]
    BadPrefix,
    #[error("unknown code word: {0}")]
    UnknownWord(String),
    #[error("share codes end in exactly two digits")]
    BadDigits,
    #[error("seed is neither a number nor a share code")]
    Unparsable,
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Hashes a (word, digits) pair into the seed. The pair is packed the
/// same way it appears in the code, behind a domain prefix so other
/// derivations cannot collide with share codes.
fn compose_seed(word_index: usize, nn: u8) -> u64 {
    let packed = (word_index as u16) | (u16::from(nn) << 9);
    let mut bytes = Vec::with_capacity(SEED_DOMAIN.len() + 2);
    bytes.extend_from_slice(SEED_DOMAIN);
    bytes.extend_from_slice(&packed.to_le_bytes());
    fnv1a(&bytes)
}

/// Validates a share code's shape and splits it into its parts.
pub fn parse_share_code(code: &str) -> Result<(usize, u8), ShareCodeError> {
    let trimmed = code.trim().to_ascii_uppercase();
    let body = trimmed
        .strip_prefix(CODE_PREFIX)
        .ok_or(ShareCodeError::BadPrefix)?;
    if !body.is_ascii() || body.len() < 3 {
        return Err(ShareCodeError::BadDigits);
    }
    let (word, digits) = body.split_at(body.len() - 2);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ShareCodeError::BadDigits);
    }
    let nn: u8 = digits.parse().map_err(|_| ShareCodeError::BadDigits)?;
    let index = WORD_LIST
        .iter()
        .position(|entry| *entry == word)
        .ok_or_else(|| ShareCodeError::UnknownWord(word.to_string()))?;
    Ok((index, nn))
}

/// Turns a share code into the seed it names.
pub fn decode_to_seed(code: &str) -> Result<u64, ShareCodeError> {
    let (index, nn) = parse_share_code(code)?;
    Ok(compose_seed(index, nn))
}

/// Formats a share code from its parts.
#[must_use]
pub fn encode_friendly(word_index: usize, nn: u8) -> String {
    format!(
        "{CODE_PREFIX}{}{:02}",
        WORD_LIST[word_index % WORD_LIST.len()],
        nn % 100
    )
}

/// Picks a share code from arbitrary entropy (usually the clock).
#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let index = (entropy % WORD_LIST.len() as u64) as usize;
    let nn = ((entropy >> 6) % 100) as u8;
    encode_friendly(index, nn)
}

/// Accepts either a bare integer seed or a share code.
pub fn parse_seed(input: &str) -> Result<u64, ShareCodeError> {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.parse().map_err(|_| ShareCodeError::Unparsable);
    }
    decode_to_seed(trimmed)
}
