use {
    crate::{DynamicArray, RawBuf},
    std::{
        fmt::{self, Formatter},
        mem::{self, ManuallyDrop},
        ptr, slice,
    },
};

/// Owning iterator over a [`DynamicArray`]: yields elements in storage order,
/// drops whatever was not consumed, then lets the buffer free the block.
pub struct IntoIter<T> {
    _buf: RawBuf<T>,
    start: *const T,
    end: *const T,
}

impl<T> IntoIter<T> {
    /// Remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are still live
        unsafe { slice::from_raw_parts(self.start, self.len()) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let array = ManuallyDrop::new(self);
        // SAFETY: `buf` moves out exactly once; the `ManuallyDrop` wrapper
        // keeps the array's own drop from ever running
        unsafe {
            let buf = ptr::read(&array.buf);
            let start = buf.ptr().cast_const();
            let end = start.add(array.len);
            IntoIter { _buf: buf, start, end }
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            // SAFETY: the slot is live; advancing `start` disowns it
            unsafe {
                let value = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end as usize - self.start as usize) / mem::size_of::<T>();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: only the unconsumed elements are live; `RawBuf` then
        // releases the block
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.start.cast_mut(),
                self.len(),
            ));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

unsafe impl<T: Sync> Sync for IntoIter<T> {}
unsafe impl<T: Send> Send for IntoIter<T> {}
