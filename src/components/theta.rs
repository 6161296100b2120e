use super::super::KeccakLane;

pub fn theta<T: KeccakLane>(state: &mut [T; 25]) {
	let mut parities: [T; 5] = [Default::default(); 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= state[5 * y + x];
		}
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate(1);

		for y in 0 .. 5 {
			state[5 * y + x] ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_spreads_to_neighbouring_columns() {
	let mut state = [0u16; 25];
	// lane (2, 3)
	state[17] = 0x8000;

	theta(&mut state);

	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let expected = match (x, y) {
				(2, 3) => 0x8000,
				// column 3 sees the parity of column 2 unrotated
				(3, _) => 0x8000,
				// column 1 sees it rotated left by one
				(1, _) => 0x0001,
				_ => 0,
			};

			assert_eq!(state[5 * y + x], expected, "lane ({}, {})", x, y);
		}
	}
}

#[test]
fn even_columns_are_fixed_points() {
	let mut state = [0u64; 25];
	state[3] = 0xdead_beef;
	state[8] = 0xdead_beef;

	let before = state;
	theta(&mut state);

	assert_eq!(state, before);
}
