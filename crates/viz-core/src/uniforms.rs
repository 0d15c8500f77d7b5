//! Host-side packing of the per-variant WGSL `Params` uniform struct.

use glam::Vec2;

use crate::signal::{SignalId, SignalValue};
use crate::variant::Variant;

/// Anything that accepts per-frame uniform writes.
pub trait UniformSink {
    fn scalar(&mut self, id: SignalId, value: f32);
    fn vec2(&mut self, id: SignalId, value: Vec2);
}

/// Byte image of a variant's uniform struct.
///
/// Offsets follow WGSL uniform layout rules for the two shapes in use:
/// `vec2<f32>` aligns to 8, `f32` to 4, struct size rounds up to 16.
#[derive(Clone, Debug)]
pub struct UniformBlock {
    offsets: [Option<usize>; SignalId::COUNT],
    bytes: Vec<u8>,
}

#[inline]
fn align_up(v: usize, align: usize) -> usize {
    (v + align - 1) / align * align
}

impl UniformBlock {
    pub fn for_variant(variant: Variant) -> Self {
        let mut offsets = [None; SignalId::COUNT];
        let mut cursor = 0usize;
        for spec in variant.signals() {
            let (align, size) = match spec.default {
                SignalValue::Scalar(_) => (4, 4),
                SignalValue::Vec2(_) => (8, 8),
            };
            cursor = align_up(cursor, align);
            offsets[spec.id.index()] = Some(cursor);
            cursor += size;
        }
        Self {
            offsets,
            bytes: vec![0u8; align_up(cursor, 16)],
        }
    }

    #[inline]
    pub fn offset(&self, id: SignalId) -> Option<usize> {
        self.offsets[id.index()]
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read a scalar back out of the packed image.
    pub fn read_scalar(&self, id: SignalId) -> Option<f32> {
        let at = self.offset(id)?;
        Some(bytemuck::pod_read_unaligned(&self.bytes[at..at + 4]))
    }

    pub fn read_vec2(&self, id: SignalId) -> Option<Vec2> {
        let at = self.offset(id)?;
        let xy: [f32; 2] = bytemuck::pod_read_unaligned(&self.bytes[at..at + 8]);
        Some(Vec2::from(xy))
    }

    fn write(&mut self, id: SignalId, data: &[u8]) {
        match self.offset(id) {
            Some(at) => self.bytes[at..at + data.len()].copy_from_slice(data),
            None => log::debug!("[uniforms] no slot for {}", id.uniform_name()),
        }
    }
}

impl UniformSink for UniformBlock {
    fn scalar(&mut self, id: SignalId, value: f32) {
        self.write(id, bytemuck::bytes_of(&value));
    }

    fn vec2(&mut self, id: SignalId, value: Vec2) {
        self.write(id, bytemuck::bytes_of(&value.to_array()));
    }
}
