use super::super::KeccakLane;

pub fn chi<T: KeccakLane>(state: &mut [T; 25]) {
	for y in (0 .. 25).step_by(5) {
		let mut row = [T::default(); 5];
		row.copy_from_slice(&state[y .. y + 5]);

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			state[y + x] = row[x] ^ (!row[xp1] & row[xp2]);
		}
	}
}

#[test]
fn rows_mix_independently() {
	for lane in 0 .. 25 {
		let mut state = [0u32; 25];
		state[lane] = 0xffff_ffff;

		chi(&mut state);

		let row = lane - lane % 5;
		let x = lane % 5;

		for i in 0 .. 25 {
			let expected = if i == lane {
				0xffff_ffff
			} else if i == row + (x + 3) % 5 {
				// the lane two ahead of it is set, the one ahead is clear
				0xffff_ffff
			} else {
				0
			};

			assert_eq!(state[i], expected, "lane {} with source {}", i, lane);
		}
	}
}

#[test]
fn reads_row_before_writing() {
	let mut state = [0u8; 25];
	state[5 .. 10].copy_from_slice(&[0x0f, 0x33, 0x55, 0xff, 0x00]);

	chi(&mut state);

	let expected: [u8; 5] = [
		0x0f ^ (!0x33 & 0x55),
		0x33 ^ (!0x55 & 0xff),
		0x55 ^ (!0xff & 0x00),
		0xff ^ (!0x00 & 0x0f),
		0x00 ^ (!0x0f & 0x33),
	];

	assert_eq!(state[5 .. 10], expected);
	assert_eq!(state[.. 5], [0; 5]);
}
