//! Portable bounded TX queue for `no_std` environments.
//!
//! Models the small transmit FIFO in front of a bit-serial LED peripheral.
//! The render loop pushes words through a [`FifoTransmitter`] and whatever
//! feeds the peripheral (an interrupt handler, a DMA refill task) drains the
//! queue through a [`Receiver`]. Access is guarded by `critical-section`, the
//! storage is a fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::PixelTransmitter;
use crate::color::Color;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value into the channel.
    ///
    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    /// Send a value, spinning until the channel has room.
    pub fn send_blocking(&self, mut value: T) {
        while let Err(TrySendError(rejected)) = self.channel.try_send(value) {
            value = rejected;
            core::hint::spin_loop();
        }
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Item queued for the LED peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxWord {
    /// Wire word, see [`Color::wire_word`]
    Pixel(u32),
    /// Keep the line idle for at least this long
    Latch(Duration),
}

/// Type alias for the TX queue
pub type TxChannel<const SIZE: usize> = Channel<TxWord, SIZE>;

/// Transmitter that feeds a [`TxChannel`]
///
/// Blocks while the queue is full, the same way a write to a full hardware
/// FIFO stalls.
#[derive(Clone, Copy)]
pub struct FifoTransmitter<'a, const SIZE: usize> {
    sender: Sender<'a, TxWord, SIZE>,
}

impl<'a, const SIZE: usize> FifoTransmitter<'a, SIZE> {
    pub const fn new(sender: Sender<'a, TxWord, SIZE>) -> Self {
        Self { sender }
    }
}

impl<const SIZE: usize> PixelTransmitter for FifoTransmitter<'_, SIZE> {
    fn transmit(&mut self, pixel: Color) {
        self.sender.send_blocking(TxWord::Pixel(pixel.wire_word()));
    }

    fn latch(&mut self, hold: Duration) {
        self.sender.send_blocking(TxWord::Latch(hold));
    }
}
