use std::marker::PhantomData;

use log::{debug, trace};

use crate::chunk::number::{Element, Number};
use crate::core::Repr;

/// Typed backing storage of a widening vector, one variant per representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Lanes {
    UInt8(Vec<u8>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Float64(Vec<f64>),
}

macro_rules! dispatch {
    ($lanes:expr, $v:ident => $body:expr) => {
        match $lanes {
            Lanes::UInt8($v) => $body,
            Lanes::Int8($v) => $body,
            Lanes::Int16($v) => $body,
            Lanes::Int32($v) => $body,
            Lanes::Int64($v) => $body,
            Lanes::UInt16($v) => $body,
            Lanes::UInt32($v) => $body,
            Lanes::UInt64($v) => $body,
            Lanes::Float64($v) => $body,
        }
    };
}

impl Lanes {
    pub fn with_capacity(repr: Repr, capacity: usize) -> Self {
        match repr {
            Repr::UInt8 => Lanes::UInt8(Vec::with_capacity(capacity)),
            Repr::Int8 => Lanes::Int8(Vec::with_capacity(capacity)),
            Repr::Int16 => Lanes::Int16(Vec::with_capacity(capacity)),
            Repr::Int32 => Lanes::Int32(Vec::with_capacity(capacity)),
            Repr::Int64 => Lanes::Int64(Vec::with_capacity(capacity)),
            Repr::UInt16 => Lanes::UInt16(Vec::with_capacity(capacity)),
            Repr::UInt32 => Lanes::UInt32(Vec::with_capacity(capacity)),
            Repr::UInt64 => Lanes::UInt64(Vec::with_capacity(capacity)),
            Repr::Float64 => Lanes::Float64(Vec::with_capacity(capacity)),
        }
    }

    pub fn repr(&self) -> Repr {
        match self {
            Lanes::UInt8(_) => Repr::UInt8,
            Lanes::Int8(_) => Repr::Int8,
            Lanes::Int16(_) => Repr::Int16,
            Lanes::Int32(_) => Repr::Int32,
            Lanes::Int64(_) => Repr::Int64,
            Lanes::UInt16(_) => Repr::UInt16,
            Lanes::UInt32(_) => Repr::UInt32,
            Lanes::UInt64(_) => Repr::UInt64,
            Lanes::Float64(_) => Repr::Float64,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        dispatch!(self, v => v.capacity())
    }

    pub fn get(&self, idx: usize) -> Option<Number> {
        dispatch!(self, v => v.get(idx).map(|x| x.into_number()))
    }

    /// Raw element bytes in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        dispatch!(self, v => bytemuck::cast_slice(v.as_slice()))
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = Number> + '_> {
        dispatch!(self, v => Box::new(v.iter().map(|x| x.into_number())))
    }

    /// Casts as many elements as fit into `out`, returning the count written.
    pub fn copy_into<T: Element>(&self, out: &mut [T]) -> usize {
        dispatch!(self, v => {
            let n = v.len().min(out.len());
            for (slot, x) in out.iter_mut().zip(v.iter()) {
                *slot = T::from_number(x.into_number());
            }
            n
        })
    }

    fn push_cast(&mut self, value: Number) {
        dispatch!(self, v => v.push(value.cast()))
    }

    fn all_fit(&self, repr: Repr) -> bool {
        dispatch!(self, v => v.iter().all(|x| x.into_number().fits(repr)))
    }

    fn collect<T: Element>(&self, extra: usize) -> Vec<T> {
        dispatch!(self, v => {
            let mut out = Vec::with_capacity(v.len() + extra);
            out.extend(v.iter().map(|x| T::from_number(x.into_number())));
            out
        })
    }

    /// Copy of the elements in `repr`, with room for `extra` more.
    fn reencode(&self, repr: Repr, extra: usize) -> Lanes {
        match repr {
            Repr::UInt8 => Lanes::UInt8(self.collect(extra)),
            Repr::Int8 => Lanes::Int8(self.collect(extra)),
            Repr::Int16 => Lanes::Int16(self.collect(extra)),
            Repr::Int32 => Lanes::Int32(self.collect(extra)),
            Repr::Int64 => Lanes::Int64(self.collect(extra)),
            Repr::UInt16 => Lanes::UInt16(self.collect(extra)),
            Repr::UInt32 => Lanes::UInt32(self.collect(extra)),
            Repr::UInt64 => Lanes::UInt64(self.collect(extra)),
            Repr::Float64 => Lanes::Float64(self.collect(extra)),
        }
    }

    fn shrink_to_fit(&mut self) {
        dispatch!(self, v => v.shrink_to_fit())
    }
}

/// Ordered list of representations a widening vector may move through.
pub trait Chain {
    const LINKS: &'static [Repr];
}

/// Integers from narrow to wide, ending in floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericChain;

impl Chain for NumericChain {
    const LINKS: &'static [Repr] = &[
        Repr::UInt8,
        Repr::Int8,
        Repr::Int16,
        Repr::Int32,
        Repr::Int64,
        Repr::Float64,
    ];
}

/// Unsigned dictionary codes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CodeChain;

impl Chain for CodeChain {
    const LINKS: &'static [Repr] = &[Repr::UInt8, Repr::UInt16, Repr::UInt32, Repr::UInt64];
}

/// Sequence whose element representation starts at the first link of `C`
/// and moves forward along the chain whenever a pushed value does not fit.
/// It never moves back until cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct WideningVec<C: Chain> {
    lanes: Lanes,
    _chain: PhantomData<C>,
}

pub type NumericVec = WideningVec<NumericChain>;
pub type CodeVec = WideningVec<CodeChain>;

impl<C: Chain> WideningVec<C> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lanes: Lanes::with_capacity(C::LINKS[0], capacity),
            _chain: PhantomData,
        }
    }

    pub fn push(&mut self, value: impl Into<Number>) {
        let value = value.into();
        if !value.fits(self.lanes.repr()) {
            self.widen_for(value);
        }
        self.lanes.push_cast(value);
    }

    /// Moves to the first later link that holds `value` and every stored
    /// element. Falls back to the last link when none does.
    fn widen_for(&mut self, value: Number) {
        let current = self.lanes.repr();
        let top = C::LINKS[C::LINKS.len() - 1];
        let start = C::LINKS
            .iter()
            .position(|&r| r == current)
            .map_or(0, |p| p + 1);
        let target = C::LINKS[start..]
            .iter()
            .copied()
            .find(|&r| value.fits(r) && (r.contains(current) || self.lanes.all_fit(r)))
            .unwrap_or_else(|| {
                let text = format!("{:?}", value);
                debug!(
                    value = text.as_str(), repr = top.as_str();
                    "value fits no representation exactly, storing it lossily"
                );
                top
            });
        if target == current {
            return;
        }
        trace!(
            "widening {} -> {} with {} elements",
            current,
            target,
            self.lanes.len()
        );
        self.lanes = self.lanes.reencode(target, 1);
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lanes.capacity()
    }

    /// Current element representation.
    pub fn repr(&self) -> Repr {
        self.lanes.repr()
    }

    /// Narrowest link of this chain able to hold values of both the current
    /// representation and `other`.
    pub fn common_repr(&self, other: Repr) -> Repr {
        let current = self.repr();
        C::LINKS
            .iter()
            .copied()
            .find(|r| r.contains(current) && r.contains(other))
            .unwrap_or_else(|| {
                if current.contains(other) {
                    current
                } else if other.contains(current) {
                    other
                } else {
                    C::LINKS[C::LINKS.len() - 1]
                }
            })
    }

    /// Element `idx` converted to `T` with `as` semantics.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn get<T: Element>(&self, idx: usize) -> T {
        match self.lanes.get(idx) {
            Some(value) => value.cast(),
            None => panic!(
                "index {} out of range for widening vector of length {}",
                idx,
                self.len()
            ),
        }
    }

    pub fn try_get<T: Element>(&self, idx: usize) -> Option<T> {
        self.lanes.get(idx).map(Number::cast)
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.lanes.iter()
    }

    pub fn copy_into<T: Element>(&self, out: &mut [T]) -> usize {
        self.lanes.copy_into(out)
    }

    pub fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.lanes.as_bytes()
    }

    /// Drops all elements and returns to the first link. Storage is released.
    pub fn clear(&mut self) {
        self.lanes = Lanes::with_capacity(C::LINKS[0], 0);
    }

    pub fn shrink_to_fit(&mut self) {
        self.lanes.shrink_to_fit();
    }
}

impl<C: Chain> Default for WideningVec<C> {
    fn default() -> Self {
        Self::new()
    }
}
