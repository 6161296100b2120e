use super::super::KeccakLane;

pub fn iota<T: KeccakLane>(state: &mut [T; 25], rc: u64) {
	state[0] ^= T::truncate(rc);
}

#[test]
fn only_origin_changes() {
	let mut state = [0x5au8; 25];

	iota(&mut state, 0x8000_0000_8000_808b);

	assert_eq!(state[0], 0x5a ^ 0x8b);
	assert!(state[1 ..].iter().all(|&lane| lane == 0x5a));
}
