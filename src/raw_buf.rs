use {
    allocator_api2::alloc::{Allocator, Global},
    std::{
        alloc::{handle_alloc_error, Layout},
        cmp,
        fmt::{self, Formatter},
        marker::PhantomData,
        mem,
        ptr::NonNull,
    },
};

/// Error of growing or shrinking the storage block
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error due to the computed capacity exceeding the maximum
    /// (usually `isize::MAX` bytes).
    ///
    /// # Examples
    ///
    /// try to reserve more than `isize::MAX` bytes:
    ///
    /// ```
    /// use dynarray::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::<u64>::new();
    /// assert!(matches!(array.try_reserve(usize::MAX), Err(Error::CapacityOverflow)));
    /// ```
    #[error("exceeding the capacity maximum")]
    CapacityOverflow,

    /// The memory allocator returned an error
    #[error("memory allocation of {layout:?} failed")]
    AllocError {
        /// The layout of allocation request that failed
        layout: Layout,

        #[doc(hidden)]
        non_exhaustive: (),
    },
}

impl Error {
    /// Escalation path for the infallible operations: contract bugs panic,
    /// allocator failures abort.
    pub(crate) fn handle(self) -> ! {
        match self {
            Error::CapacityOverflow => panic!("capacity overflow"),
            Error::AllocError { layout, .. } => handle_alloc_error(layout),
        }
    }
}

/// Alias for `Result<T, Error>` to return from fallible storage methods
pub type Result<T> = std::result::Result<T, Error>;

/// Owned block of `cap` slots of `T`. Element lifetimes are the owner's
/// business: `RawBuf` allocates, reallocates and frees, nothing else.
pub(crate) struct RawBuf<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub const fn new_in(alloc: A) -> Self {
        Self { ptr: NonNull::dangling(), cap: 0, alloc, _marker: PhantomData }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if self.cap == 0 {
            None
        } else {
            // SAFETY: we would use `Layout::array`, but this block is already
            // allocated by it, so its size and align are known to be valid
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.cap,
                    mem::align_of::<T>(),
                );
                Some((self.ptr.cast(), layout))
            }
        }
    }

    /// Amortized growth step: bootstrap to one slot, then double.
    pub fn grow_one(&mut self) -> Result<()> {
        // `cap * 2` cannot overflow: `Layout::array` keeps `cap` under
        // `isize::MAX` bytes
        self.finish_grow(cmp::max(1, self.cap * 2))
    }

    /// Grows to exactly `len + additional` slots, if not there yet.
    pub fn grow_exact(&mut self, len: usize, additional: usize) -> Result<()> {
        let cap = len.checked_add(additional).ok_or(Error::CapacityOverflow)?;
        if cap > self.cap {
            self.finish_grow(cap)?;
        }
        Ok(())
    }

    fn finish_grow(&mut self, cap: usize) -> Result<()> {
        let new_layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
        let ptr = if let Some((ptr, old_layout)) = self.current_memory() {
            // SAFETY: block was allocated by `self.alloc` with `old_layout`,
            // and `new_layout` is no smaller than it
            unsafe { self.alloc.grow(ptr, old_layout, new_layout) }
        } else {
            self.alloc.allocate(new_layout)
        }
        .map_err(|_| Error::AllocError { layout: new_layout, non_exhaustive: () })?;

        self.ptr = ptr.cast();
        self.cap = cap;
        Ok(())
    }

    /// Shrinks the block to `cap` slots; frees it entirely at zero.
    ///
    /// Slots above `cap` must already be dead.
    pub fn shrink_to(&mut self, cap: usize) -> Result<()> {
        debug_assert!(cap <= self.cap);

        let Some((ptr, old_layout)) = self.current_memory() else {
            return Ok(());
        };

        if cap == 0 {
            // SAFETY: `ptr`/`old_layout` denote the current block
            unsafe { self.alloc.deallocate(ptr, old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
        } else {
            let new_layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
            // SAFETY: same block, and `new_layout` is no larger than `old_layout`
            let ptr = unsafe { self.alloc.shrink(ptr, old_layout, new_layout) }
                .map_err(|_| Error::AllocError { layout: new_layout, non_exhaustive: () })?;
            self.ptr = ptr.cast();
            self.cap = cap;
        }
        Ok(())
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: live elements were dropped by the owner; only the block
            // itself is released here
            unsafe { self.alloc.deallocate(ptr, layout) }
        }
    }
}

impl<T, A: Allocator> fmt::Debug for RawBuf<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}..{})", self.ptr, self.cap)
    }
}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
