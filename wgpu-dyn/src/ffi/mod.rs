//! Call bridge into the native library.
//!
//! Every entry point this crate uses is declared once in [`procs`] as a static
//! [`Procedure`]: its symbol name plus a call interface ([`Cif`]) describing the
//! argument shape and return register. The set of shapes is closed; dispatch is a
//! match over them that reinterprets the resolved address as the corresponding
//! `extern "C"` function type. Resolution happens on first call.

pub(crate) mod procs;

use std::{fmt, mem};

use parking_lot::Mutex;

use crate::{loader, Error, Result};

/// Platform calling convention the native library was built for.
///
/// `extern "C"` already lowers to this convention on each target; the value is
/// recorded so interfaces can be inspected and logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallConv {
    /// Microsoft x64: RCX, RDX, R8, R9, then stack.
    Win64,
    /// System V AMD64: RDI, RSI, RDX, RCX, R8, R9, then stack.
    SysV64,
    /// AArch64 procedure call standard.
    Aapcs64,
}

impl CallConv {
    /// Convention of the current target.
    pub const NATIVE: Self = if cfg!(all(windows, target_arch = "x86_64")) {
        Self::Win64
    } else if cfg!(target_arch = "aarch64") {
        Self::Aapcs64
    } else {
        Self::SysV64
    };
}

/// Register the primary result is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ret {
    /// No result.
    Void,
    /// A 32-bit integer, zero-extended to a word.
    U32,
    /// A machine word: pointer, handle, 64-bit integer or future id.
    Word,
}

/// Argument shapes the bridge knows how to call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgShape {
    /// `n` word arguments.
    Words(u8),
    /// One word followed by `n` `f32` arguments. The floats are supplied as IEEE-754
    /// bit patterns.
    WordThenF32s(u8),
    /// `words` word arguments followed by one struct of `size` bytes passed by value.
    WordsThenAggregate { words: u8, size: usize },
}

const MAX_WORDS: u8 = 8;
const MAX_FLOATS: u8 = 6;
const MAX_AGGREGATE_WORDS: u8 = 4;

/// Call interface of one native entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cif {
    pub conv: CallConv,
    pub args: ArgShape,
    pub ret: Ret,
}

impl Cif {
    pub const fn words(count: u8, ret: Ret) -> Self {
        assert!(count <= MAX_WORDS);
        Self {
            conv: CallConv::NATIVE,
            args: ArgShape::Words(count),
            ret,
        }
    }

    pub const fn word_then_f32s(count: u8) -> Self {
        assert!(count >= 1 && count <= MAX_FLOATS);
        Self {
            conv: CallConv::NATIVE,
            args: ArgShape::WordThenF32s(count),
            ret: Ret::Void,
        }
    }

    pub const fn aggregate(words: u8, size: usize, ret: Ret) -> Self {
        assert!(words <= MAX_AGGREGATE_WORDS);
        Self {
            conv: CallConv::NATIVE,
            args: ArgShape::WordsThenAggregate { words, size },
            ret,
        }
    }

    /// Number of word-sized values the caller supplies in the argument slice.
    pub const fn arity(&self) -> usize {
        match self.args {
            ArgShape::Words(n) => n as usize,
            ArgShape::WordThenF32s(n) => 1 + n as usize,
            ArgShape::WordsThenAggregate { words, .. } => words as usize,
        }
    }
}

/// Structs that may be passed by value through [`Procedure::call_with`].
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` and match the C definition the callee expects.
pub(crate) unsafe trait Aggregate: Copy {}

/// A native entry point, resolved on first call.
pub struct Procedure {
    name: &'static str,
    symbol: &'static [u8],
    cif: Cif,
    prepared: Mutex<Option<Result<usize>>>,
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("name", &self.name)
            .field("cif", &self.cif)
            .finish()
    }
}

impl Procedure {
    /// `symbol` is `name` followed by a nul byte.
    pub const fn new(name: &'static str, symbol: &'static [u8], cif: Cif) -> Self {
        Self {
            name,
            symbol,
            cif,
            prepared: parking_lot::const_mutex(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cif(&self) -> &Cif {
        &self.cif
    }

    /// Resolves the symbol on first use. The outcome, including failure, is kept.
    fn address(&self) -> Result<usize> {
        let mut prepared = self.prepared.lock();
        match *prepared {
            Some(ref outcome) => outcome.clone(),
            None => {
                let outcome = loader::resolve(self.name, self.symbol);
                log::trace!("Prepared {} with {:?}", self.name, self.cif);
                *prepared = Some(outcome.clone());
                outcome
            }
        }
    }

    fn check_arity(&self, got: usize) -> Result<()> {
        let expected = self.cif.arity();
        if got != expected {
            return Err(Error::ArityMismatch {
                name: self.name,
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Invokes the entry point with word-sized arguments.
    ///
    /// Returns the primary and secondary result registers. No pinned entry point
    /// returns a two-register aggregate, so the secondary is always zero.
    ///
    /// # Safety
    ///
    /// Every pointer in `args` must be valid for what the native entry point does
    /// with it, for the duration of the call.
    pub unsafe fn call(&self, args: &[usize]) -> Result<(usize, usize)> {
        if let ArgShape::WordsThenAggregate { .. } = self.cif.args {
            return Err(Error::ArityMismatch {
                name: self.name,
                expected: self.cif.arity() + 1,
                got: args.len(),
            });
        }
        self.check_arity(args.len())?;
        let address = self.address()?;
        log::trace!("Calling {}", self.name);
        // SAFETY: arity checked; the caller vouches for the pointers.
        match unsafe { dispatch(address, &self.cif, args) } {
            Some(primary) => Ok((primary, 0)),
            None => Err(Error::ArityMismatch {
                name: self.name,
                expected: self.cif.arity(),
                got: args.len(),
            }),
        }
    }

    /// Like [`call`](Self::call), returning only the primary register.
    ///
    /// # Safety
    ///
    /// See [`call`](Self::call).
    pub unsafe fn invoke(&self, args: &[usize]) -> Result<usize> {
        unsafe { self.call(args) }.map(|(primary, _)| primary)
    }

    /// Invokes an entry point whose last parameter is a struct passed by value.
    ///
    /// # Safety
    ///
    /// See [`call`](Self::call). Pointers inside `aggregate` are covered too.
    pub(crate) unsafe fn call_with<T: Aggregate>(&self, args: &[usize], aggregate: T) -> Result<usize> {
        let ArgShape::WordsThenAggregate { words, size } = self.cif.args else {
            return Err(Error::ArityMismatch {
                name: self.name,
                expected: self.cif.arity(),
                got: args.len() + 1,
            });
        };
        self.check_arity(args.len())?;
        if mem::size_of::<T>() != size {
            return Err(Error::AggregateSizeMismatch {
                name: self.name,
                expected: size,
                got: mem::size_of::<T>(),
            });
        }
        let address = self.address()?;
        log::trace!("Calling {} (+{} byte aggregate)", self.name, size);
        // SAFETY: shape checked above.
        unsafe { dispatch_aggregate(address, self.cif.ret, &args[..words as usize], aggregate) }.ok_or(
            Error::ArityMismatch {
                name: self.name,
                expected: words as usize,
                got: args.len(),
            },
        )
    }
}

/// Address of `value`, passed as a pointer argument.
pub(crate) fn addr<T>(value: &T) -> usize {
    value as *const T as usize
}

pub(crate) fn addr_mut<T>(value: &mut T) -> usize {
    value as *mut T as usize
}

/// Base address of `values`, or null when empty.
pub(crate) fn slice_addr<T>(values: &[T]) -> usize {
    if values.is_empty() {
        0
    } else {
        values.as_ptr() as usize
    }
}

/// Passes an `f32` through a word slot of a float-shaped interface.
pub(crate) fn float(value: f32) -> usize {
    value.to_bits() as usize
}

macro_rules! word {
    ($i:tt) => {
        usize
    };
}

macro_rules! float {
    ($i:tt) => {
        f32
    };
}

macro_rules! call_words {
    ($address:expr, $ret:expr, $args:expr, [$($i:tt),*]) => {{
        match $ret {
            Ret::Void => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i)),*)>($address);
                f($($args[$i]),*);
                0
            }
            Ret::U32 => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i)),*) -> u32>($address);
                f($($args[$i]),*) as usize
            }
            Ret::Word => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i)),*) -> usize>($address);
                f($($args[$i]),*)
            }
        }
    }};
}

macro_rules! call_floats {
    ($address:expr, $args:expr, [$($i:tt),*]) => {{
        let f = mem::transmute::<usize, extern "C" fn(usize, $(float!($i)),*)>($address);
        f($args[0], $(f32::from_bits($args[$i] as u32)),*);
        0
    }};
}

macro_rules! call_aggregate {
    ($address:expr, $ret:expr, $args:expr, $aggregate:expr, $ty:ty, [$($i:tt),*]) => {{
        match $ret {
            Ret::Void => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i),)* $ty)>($address);
                f($($args[$i],)* $aggregate);
                0
            }
            Ret::U32 => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i),)* $ty) -> u32>($address);
                f($($args[$i],)* $aggregate) as usize
            }
            Ret::Word => {
                let f = mem::transmute::<usize, extern "C" fn($(word!($i),)* $ty) -> usize>($address);
                f($($args[$i],)* $aggregate)
            }
        }
    }};
}

/// # Safety
///
/// `address` must be a function with the signature `cif` describes, and `args`
/// must have `cif.arity()` elements.
unsafe fn dispatch(address: usize, cif: &Cif, a: &[usize]) -> Option<usize> {
    let ret = cif.ret;
    // SAFETY: forwarded from the caller.
    Some(unsafe {
        match cif.args {
            ArgShape::Words(0) => call_words!(address, ret, a, []),
            ArgShape::Words(1) => call_words!(address, ret, a, [0]),
            ArgShape::Words(2) => call_words!(address, ret, a, [0, 1]),
            ArgShape::Words(3) => call_words!(address, ret, a, [0, 1, 2]),
            ArgShape::Words(4) => call_words!(address, ret, a, [0, 1, 2, 3]),
            ArgShape::Words(5) => call_words!(address, ret, a, [0, 1, 2, 3, 4]),
            ArgShape::Words(6) => call_words!(address, ret, a, [0, 1, 2, 3, 4, 5]),
            ArgShape::Words(7) => call_words!(address, ret, a, [0, 1, 2, 3, 4, 5, 6]),
            ArgShape::Words(8) => call_words!(address, ret, a, [0, 1, 2, 3, 4, 5, 6, 7]),
            ArgShape::WordThenF32s(1) => call_floats!(address, a, [1]),
            ArgShape::WordThenF32s(2) => call_floats!(address, a, [1, 2]),
            ArgShape::WordThenF32s(3) => call_floats!(address, a, [1, 2, 3]),
            ArgShape::WordThenF32s(4) => call_floats!(address, a, [1, 2, 3, 4]),
            ArgShape::WordThenF32s(5) => call_floats!(address, a, [1, 2, 3, 4, 5]),
            ArgShape::WordThenF32s(6) => call_floats!(address, a, [1, 2, 3, 4, 5, 6]),
            _ => return None,
        }
    })
}

/// # Safety
///
/// `address` must be a function taking `a.len()` words followed by a `T`.
unsafe fn dispatch_aggregate<T: Aggregate>(address: usize, ret: Ret, a: &[usize], t: T) -> Option<usize> {
    // SAFETY: forwarded from the caller.
    Some(unsafe {
        match a.len() {
            0 => call_aggregate!(address, ret, a, t, T, []),
            1 => call_aggregate!(address, ret, a, t, T, [0]),
            2 => call_aggregate!(address, ret, a, t, T, [0, 1]),
            3 => call_aggregate!(address, ret, a, t, T, [0, 1, 2]),
            4 => call_aggregate!(address, ret, a, t, T, [0, 1, 2, 3]),
            _ => return None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static PROBE: Procedure = Procedure::new("wgpuProbe", b"wgpuProbe\0", Cif::words(3, Ret::Word));
    static VIEWPORT: Procedure = Procedure::new(
        "wgpuProbeViewport",
        b"wgpuProbeViewport\0",
        Cif::word_then_f32s(6),
    );

    #[test]
    fn arity_is_checked_before_loading() {
        let err = unsafe { PROBE.call(&[1, 2]) }.unwrap_err();
        assert!(matches!(
            err,
            Error::ArityMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
        let err = unsafe { VIEWPORT.call(&[0; 6]) }.unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { expected: 7, .. }));
    }

    #[test]
    fn aggregate_requires_call_with() {
        static AGG: Procedure = Procedure::new(
            "wgpuProbeAggregate",
            b"wgpuProbeAggregate\0",
            Cif::aggregate(1, 16, Ret::Void),
        );
        assert!(unsafe { AGG.call(&[0]) }.is_err());

        #[derive(Clone, Copy)]
        #[repr(C)]
        struct Eight(u64);
        unsafe impl Aggregate for Eight {}
        let err = unsafe { AGG.call_with(&[0], Eight(0)) }.unwrap_err();
        assert!(matches!(
            err,
            Error::AggregateSizeMismatch {
                expected: 16,
                got: 8,
                ..
            }
        ));
    }

    #[test]
    fn conv_matches_target() {
        #[cfg(all(windows, target_arch = "x86_64"))]
        assert_eq!(CallConv::NATIVE, CallConv::Win64);
        #[cfg(all(unix, target_arch = "x86_64"))]
        assert_eq!(CallConv::NATIVE, CallConv::SysV64);
        assert_eq!(PROBE.cif().conv, CallConv::NATIVE);
    }

    #[test]
    fn missing_symbol_fails_every_time() {
        // Either the library is absent (not loaded) or it lacks this symbol.
        for _ in 0..2 {
            match unsafe { PROBE.call(&[0, 0, 0]) } {
                Err(Error::LibraryNotLoaded(_)) | Err(Error::MissingSymbol("wgpuProbe")) => {}
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}
