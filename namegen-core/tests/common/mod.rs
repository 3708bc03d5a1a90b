use rand::RngCore;

/// Random source replaying a fixed list of uniform draws in `[0, 1)`.
///
/// Each `next_u64` is encoded so that `Rng::random::<f64>()` yields the
/// scripted value. The script wraps around when exhausted.
pub struct ScriptedRng {
	draws: Vec<f64>,
	cursor: usize,
}

impl ScriptedRng {
	pub fn new(draws: &[f64]) -> Self {
		assert!(!draws.is_empty(), "script needs at least one draw");
		assert!(draws.iter().all(|u| (0.0..1.0).contains(u)), "draws must be in [0, 1)");
		Self { draws: draws.to_vec(), cursor: 0 }
	}
}

impl RngCore for ScriptedRng {
	fn next_u32(&mut self) -> u32 {
		(self.next_u64() >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		let u = self.draws[self.cursor % self.draws.len()];
		self.cursor += 1;
		// f64 sampling keeps the 53 high bits of the u64
		((u * (1u64 << 53) as f64) as u64) << 11
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		for chunk in dst.chunks_mut(8) {
			let bytes = self.next_u64().to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}
}
