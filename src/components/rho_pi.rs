use super::super::{KeccakLane, PI_INDICES, RHO_OFFSETS};

/// Rotates every lane by its rho offset and moves it to its pi position in
/// one pass along the orbit. The origin lane is left alone.
pub fn rho_pi<T: KeccakLane>(state: &mut [T; 25]) {
	let mut last = state[1];

	for (&index, &offset) in PI_INDICES.iter().zip(RHO_OFFSETS.iter()) {
		let current = state[index];
		state[index] = last.rotate(offset);
		last = current;
	}
}

#[cfg(test)]
fn destination_of<T: KeccakLane>(source: usize, marker: T) -> usize {
	let mut state = [T::default(); 25];
	state[source] = marker;

	rho_pi(&mut state);

	let mut found = None;

	for (i, &lane) in state.iter().enumerate() {
		if lane != T::default() {
			assert!(found.is_none(), "lane {} was duplicated", source);
			found = Some(i);
		}
	}

	found.expect("lane vanished")
}

#[test]
fn lanes_move_to_pi_positions() {
	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			assert_eq!(destination_of(5 * y + x, 1u64), 5 * new_y + new_x);
		}
	}
}

#[test]
fn lane_positions_are_width_independent() {
	for source in 0 .. 25 {
		let target = destination_of(source, 1u64);

		assert_eq!(destination_of(source, 1u8), target);
		assert_eq!(destination_of(source, 1u16), target);
		assert_eq!(destination_of(source, 1u32), target);
	}
}

#[test]
fn rotation_offsets_follow_source_lane() {
	let mut state = [1u64; 25];

	rho_pi(&mut state);

	// lane (1, 0) is rotated by 1 and lands on (0, 2)
	assert_eq!(state[10], 2);
	// lane (0, 2) is rotated by 3 and lands on (2, 1)
	assert_eq!(state[7], 8);
	// origin untouched
	assert_eq!(state[0], 1);

	let mut narrow = [1u8; 25];

	rho_pi(&mut narrow);

	// lane (0, 1) owes 36 bits, 4 once reduced to an 8-bit lane
	let mut wide = [0u64; 25];
	wide[5] = 1;
	rho_pi(&mut wide);
	let target = wide.iter().position(|&lane| lane != 0).unwrap();

	assert_eq!(wide[target], 1 << 36);
	assert_eq!(narrow[target], 1 << 4);
}
