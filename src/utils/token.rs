use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Bookkeeping id for a composed question. Independent of the question text;
/// a fresh v4 nonce keeps repeated inputs from colliding.
pub fn generate_question_id(
    discipline: &str,
    topic: &str,
    question_type: &str,
    sequence_index: u64,
) -> String {
    let nonce = Uuid::new_v4();
    let mut hasher = Sha256::new();
    hasher.update(discipline.as_bytes());
    hasher.update(b"|");
    hasher.update(topic.as_bytes());
    hasher.update(b"|");
    hasher.update(question_type.as_bytes());
    hasher.update(b"|");
    hasher.update(sequence_index.to_le_bytes());
    hasher.update(nonce.as_bytes());
    let digest = hasher.finalize();

    format!("q_{}_{}", hex::encode(&digest[..8]), to_base36(sequence_index))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
