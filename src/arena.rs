//! Bump-pointer scratch memory.
//!
//! An [`Arena`] hands out zeroed, aligned byte slices from one fixed block and only ever
//! gives memory back all at once through [`Arena::reset`]. It backs the short-lived strings
//! built every frame (see [`format_in!`](crate::format_in)) and the text copies made by the
//! renderer.

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;

/// Alignment of every allocation: two pointers wide, which covers every scalar on 32 and 64
/// bit targets.
pub const DEFAULT_ALIGNMENT: usize = 2 * std::mem::size_of::<*const ()>();

/// A fixed-capacity bump allocator.
///
/// Allocating only needs `&self`, so several allocations can be alive at once. Rewinding
/// ([`reset`](Arena::reset), [`pop_last`](Arena::pop_last)) needs `&mut self`, which means the
/// borrow checker rejects any slice kept alive across a rewind.
pub struct Arena {
    buffer: NonNull<u8>,
    capacity: usize,
    prev_offset: Cell<usize>,
    curr_offset: Cell<usize>,
}

fn align_forward(offset: usize) -> usize {
    // Same as `offset % DEFAULT_ALIGNMENT` since the alignment is a power of two
    let modulo = offset & (DEFAULT_ALIGNMENT - 1);
    if modulo != 0 {
        offset + DEFAULT_ALIGNMENT - modulo
    } else {
        offset
    }
}

impl Arena {
    /// Allocates a zero-initialised block of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        let buffer = if capacity == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::layout(capacity);
            // SAFETY: the layout has a non-zero size.
            let ptr = unsafe { alloc::alloc_zeroed(layout) };
            match NonNull::new(ptr) {
                Some(ptr) => ptr,
                None => alloc::handle_alloc_error(layout),
            }
        };
        Self {
            buffer,
            capacity,
            prev_offset: Cell::new(0),
            curr_offset: Cell::new(0),
        }
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::from_size_align(capacity, DEFAULT_ALIGNMENT) {
            Ok(layout) => layout,
            Err(_) => panic!("Arena capacity of {capacity} bytes is too large"),
        }
    }

    /// Returns `size` zeroed bytes aligned to [`DEFAULT_ALIGNMENT`].
    ///
    /// # Panics
    /// When the aligned offset plus `size` does not fit in the arena. Scratch arenas are sized
    /// for the worst case of a frame, so running out is a sizing bug rather than a runtime
    /// condition.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc(&self, size: usize) -> &mut [u8] {
        let start = self.curr_offset.get();
        let offset = align_forward(start);
        let fits = offset
            .checked_add(size)
            .is_some_and(|end| end <= self.capacity);
        assert!(
            fits,
            "Arena ran out of space left ({} of {} bytes used, {} requested)",
            start, self.capacity, size
        );

        self.prev_offset.set(start);
        self.curr_offset.set(offset + size);

        // SAFETY: `offset..offset + size` is inside the buffer. Offsets only move forward
        // while `&self` borrows exist and rewinding takes `&mut self`, so no other live slice
        // overlaps this range.
        let slice =
            unsafe { std::slice::from_raw_parts_mut(self.buffer.as_ptr().add(offset), size) };
        slice.fill(0);
        slice
    }

    /// Copies `text` into the arena.
    pub fn alloc_str(&self, text: &str) -> &str {
        let bytes = self.alloc(text.len());
        bytes.copy_from_slice(text.as_bytes());
        let bytes: &[u8] = bytes;
        // SAFETY: the bytes were copied verbatim from a `str`.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Copies `text` into the arena followed by a NUL byte.
    ///
    /// Text containing an interior NUL is cut short at that byte.
    pub fn alloc_cstr(&self, text: &str) -> &CStr {
        let bytes = self.alloc(text.len() + 1);
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        let bytes: &[u8] = bytes;
        CStr::from_bytes_until_nul(bytes).unwrap_or_default()
    }

    /// Formats `args` into the arena and returns the resulting string.
    ///
    /// A NUL byte is reserved after the text so the bytes can be handed to C APIs as well.
    /// Usually called through [`format_in!`](crate::format_in).
    pub fn format(&self, args: fmt::Arguments<'_>) -> &str {
        struct Counter(usize);

        impl fmt::Write for Counter {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0 += s.len();
                Ok(())
            }
        }

        struct Cursor<'b> {
            buf: &'b mut [u8],
            at: usize,
        }

        impl fmt::Write for Cursor<'_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                let end = self.at + s.len();
                let dst = self.buf.get_mut(self.at..end).ok_or(fmt::Error)?;
                dst.copy_from_slice(s.as_bytes());
                self.at = end;
                Ok(())
            }
        }

        let mut counter = Counter(0);
        let _ = fmt::write(&mut counter, args);

        let buf = self.alloc(counter.0 + 1);
        let mut cursor = Cursor { buf: &mut *buf, at: 0 };
        let _ = fmt::write(&mut cursor, args);
        let len = cursor.at;

        let buf: &[u8] = buf;
        // SAFETY: the cursor only ever copies whole `str` pieces.
        unsafe { std::str::from_utf8_unchecked(&buf[..len]) }
    }

    /// Undoes the most recent allocation.
    pub fn pop_last(&mut self) {
        self.curr_offset.set(self.prev_offset.get());
    }

    /// Discards every allocation. The memory itself is left as is.
    pub fn reset(&mut self) {
        self.curr_offset.set(0);
        self.prev_offset.set(0);
    }

    /// Frees the backing buffer.
    pub fn release(self) {
        drop(self);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes handed out since the last reset, alignment padding included.
    pub fn used(&self) -> usize {
        self.curr_offset.get()
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(align_forward(self.curr_offset.get()))
    }

    /// Whether an allocation of `size` bytes would succeed right now.
    pub fn fits(&self, size: usize) -> bool {
        size <= self.remaining()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        if self.capacity != 0 {
            // SAFETY: allocated in `new` with exactly this layout.
            unsafe { alloc::dealloc(self.buffer.as_ptr(), Self::layout(self.capacity)) };
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("prev_offset", &self.prev_offset.get())
            .field("curr_offset", &self.curr_offset.get())
            .finish()
    }
}

/// `format!` into an [`Arena`]. The returned `&str` lives until the arena is reset.
///
/// ```
/// use ply_compositor::{arena::Arena, format_in};
///
/// let arena = Arena::new(256);
/// let label = format_in!(arena, "Score: {}", 42);
/// assert_eq!(label, "Score: 42");
/// ```
#[macro_export]
macro_rules! format_in {
    ($arena:expr, $($arg:tt)*) => {
        $arena.format(::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_are_aligned_and_disjoint() {
        let arena = Arena::new(1024);
        let a = arena.alloc(3);
        let b = arena.alloc(40);
        let c = arena.alloc(1);

        let ranges = [
            (a.as_ptr() as usize, a.len()),
            (b.as_ptr() as usize, b.len()),
            (c.as_ptr() as usize, c.len()),
        ];
        for (start, _) in ranges {
            assert_eq!(start % DEFAULT_ALIGNMENT, 0);
        }
        for pair in ranges.windows(2) {
            let (first, first_len) = pair[0];
            let (second, _) = pair[1];
            assert!(first + first_len <= second);
        }
        assert!(arena.used() <= arena.capacity());
    }

    #[test]
    fn allocations_are_zeroed() {
        let mut arena = Arena::new(64);
        arena.alloc(16).fill(0xAB);
        arena.reset();
        assert!(arena.alloc(16).iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic(expected = "Arena ran out of space left")]
    fn exceeding_capacity_panics() {
        let arena = Arena::new(32);
        arena.alloc(20);
        // Aligned to 16 on 64 bit targets, so this no longer fits either way.
        arena.alloc(20);
    }

    #[test]
    fn exact_fit_is_allowed() {
        let arena = Arena::new(DEFAULT_ALIGNMENT * 2);
        arena.alloc(DEFAULT_ALIGNMENT);
        arena.alloc(DEFAULT_ALIGNMENT);
        assert_eq!(arena.remaining(), 0);
        assert!(!arena.fits(1));
    }

    #[test]
    fn reset_reuses_memory() {
        let mut arena = Arena::new(128);
        let before = arena.alloc(10).as_ptr();
        arena.alloc(10);
        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.alloc(10).as_ptr(), before);
    }

    #[test]
    fn pop_last_only_undoes_the_latest_allocation() {
        let mut arena = Arena::new(128);
        arena.alloc(5);
        let used = arena.used();
        let second = arena.alloc(7).as_ptr();
        arena.pop_last();
        assert_eq!(arena.used(), used);
        assert_eq!(arena.alloc(7).as_ptr(), second);
    }

    #[test]
    fn format_in_writes_into_the_arena() {
        let arena = Arena::new(256);
        let first = format_in!(arena, "{} items", 3);
        let second = format_in!(arena, "{:.1}%", 12.34);
        assert_eq!(first, "3 items");
        assert_eq!(second, "12.3%");
        // text plus the reserved NUL byte
        assert!(arena.used() >= first.len() + 1 + second.len() + 1);
    }

    #[test]
    fn cstr_copies_are_nul_terminated() {
        let arena = Arena::new(64);
        let text = arena.alloc_cstr("hello");
        assert_eq!(text.to_bytes_with_nul(), b"hello\0");

        let cut = arena.alloc_cstr("a\0b");
        assert_eq!(cut.to_bytes(), b"a");
    }

    #[test]
    fn release_after_use() {
        let arena = Arena::new(64);
        assert_eq!(arena.alloc_str("scratch"), "scratch");
        arena.release();

        let empty = Arena::new(0);
        empty.release();
    }

    #[test]
    fn empty_arena_handles_empty_allocations() {
        let arena = Arena::new(0);
        assert!(arena.alloc(0).is_empty());
        assert_eq!(arena.alloc_str(""), "");
    }
}
