use thiserror::Error;

/// Returned when more rounds are requested than KECCAK-f defines for the lane
/// width in use. The state is left exactly as it was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("keccak-p[{state_bits}] supports at most {max} rounds, {requested} requested")]
pub struct RoundCountTooHigh {
	/// The round count passed by the caller.
	pub requested: usize,
	/// `KECCAK_F_ROUND_COUNT` for the lane width.
	pub max: usize,
	/// Width of the whole state in bits (25 lanes).
	pub state_bits: usize,
}

#[test]
fn message_names_the_permutation() {
	let err = RoundCountTooHigh {requested: 19, max: 18, state_bits: 200};

	assert_eq!(
		std::format!("{}", err),
		"keccak-p[200] supports at most 18 rounds, 19 requested",
	);
}
