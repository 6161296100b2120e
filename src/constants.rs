use super::KeccakLane;

/// Number of lanes in the state.
pub const PLEN: usize = 25;

/// Lanes moved by the fused rho/pi step (every lane but the origin).
const ORBIT_LEN: usize = PLEN - 1;

const fn step_lfsr(state: u8) -> (u8, bool) {
	let new_bit = ((state & 0x8e).count_ones() & 1) as u8;
	let lfsr_output = state & 0x80 != 0;
	let new_state = (state << 1) | new_bit;

	(new_state, lfsr_output)
}

const fn compute_round_constants() -> [u64; 24] {
	let mut lfsr = 0x80;
	let mut out = [0; 24];

	let mut i = 0;

	while i < 24 {
		let mut j = 0;

		while j < 7 {
			let place = (1 << j) - 1;

			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				out[i] |= 1 << place;
			}

			j += 1;
		}

		i += 1;
	}

	out
}

// Walks the orbit (x, y) -> (y, 2x + 3y) starting from lane (1, 0). Entry `t`
// holds the destination of step `t` and the rotation owed by its source lane.
const fn compute_rho_pi() -> ([u32; ORBIT_LEN], [usize; ORBIT_LEN]) {
	let mut offsets = [0; ORBIT_LEN];
	let mut indices = [0; ORBIT_LEN];

	let mut rotation_amount = 0;

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < ORBIT_LEN {
		rotation_amount += t + 1;
		offsets[t] = (rotation_amount % 64) as u32;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		indices[t] = 5 * y + x;

		t += 1;
	}

	(offsets, indices)
}

/// Round constants of KECCAK-f\[1600\], first round first.
pub const ROUND_CONSTANTS: [u64; 24] = compute_round_constants();

/// Rho rotation offsets in orbit order. Narrower lanes reduce them modulo
/// their width when rotating.
pub const RHO_OFFSETS: [u32; ORBIT_LEN] = compute_rho_pi().0;

/// Pi destination lanes (`5 * y + x`) in orbit order.
pub const PI_INDICES: [usize; ORBIT_LEN] = compute_rho_pi().1;

/// The constants used by KECCAK-p with `round_count` rounds on lanes of type
/// `L`: the last `round_count` constants of KECCAK-f for that width.
///
/// Callers check `round_count` against `L::KECCAK_F_ROUND_COUNT` first.
pub(crate) fn round_constant_window<L: KeccakLane>(round_count: usize) -> &'static [u64] {
	let full = L::KECCAK_F_ROUND_COUNT;

	&ROUND_CONSTANTS[full - round_count .. full]
}

#[test]
fn round_constants_match_fips_202() {
	assert_eq!(ROUND_CONSTANTS, [
		0x0000_0000_0000_0001, 0x0000_0000_0000_8082,
		0x8000_0000_0000_808a, 0x8000_0000_8000_8000,
		0x0000_0000_0000_808b, 0x0000_0000_8000_0001,
		0x8000_0000_8000_8081, 0x8000_0000_0000_8009,
		0x0000_0000_0000_008a, 0x0000_0000_0000_0088,
		0x0000_0000_8000_8009, 0x0000_0000_8000_000a,
		0x0000_0000_8000_808b, 0x8000_0000_0000_008b,
		0x8000_0000_0000_8089, 0x8000_0000_0000_8003,
		0x8000_0000_0000_8002, 0x8000_0000_0000_0080,
		0x0000_0000_0000_800a, 0x8000_0000_8000_000a,
		0x8000_0000_8000_8081, 0x8000_0000_0000_8080,
		0x0000_0000_8000_0001, 0x8000_0000_8000_8008,
	]);
}

#[test]
fn rho_offsets_match_fips_202() {
	assert_eq!(RHO_OFFSETS, [
		1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
		27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
	]);
}

#[test]
fn pi_indices_match_fips_202() {
	assert_eq!(PI_INDICES, [
		10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
		15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
	]);
}

#[test]
fn pi_visits_every_lane_but_origin_once() {
	let mut seen = [false; PLEN];

	for &index in PI_INDICES.iter() {
		assert!(!seen[index]);
		seen[index] = true;
	}

	assert!(!seen[0]);
	// the orbit closes back on lane (1, 0)
	assert_eq!(PI_INDICES[ORBIT_LEN - 1], 1);
}

#[test]
fn windows_are_trailing_slices() {
	assert!(round_constant_window::<u64>(0).is_empty());
	assert_eq!(round_constant_window::<u64>(24), &ROUND_CONSTANTS[..]);
	assert_eq!(round_constant_window::<u64>(12), &ROUND_CONSTANTS[12 ..]);

	assert_eq!(round_constant_window::<u8>(18), &ROUND_CONSTANTS[.. 18]);
	assert_eq!(round_constant_window::<u8>(1), &ROUND_CONSTANTS[17 .. 18]);
	assert_eq!(round_constant_window::<u16>(3), &ROUND_CONSTANTS[17 .. 20]);
	assert_eq!(round_constant_window::<u32>(22), &ROUND_CONSTANTS[.. 22]);
}
