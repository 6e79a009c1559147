//! Sampling and bounded dispatch

use super::EventHandler;
use crate::config::MAX_DISPATCH_PER_TICK;
use crate::event::{Event, EventQueue};
use crate::traits::{ButtonDebouncer, DriverError, EncoderReader, KeypadScanner};

/// Outcome of one [`Poller::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Events produced by the sampling steps
    pub sampled: usize,
    /// Sampled events lost to a full queue
    pub dropped: usize,
    /// Events handed to the handler
    pub dispatched: usize,
    /// Keypad scan error, if any
    pub keypad_fault: Option<DriverError>,
    /// Encoder read error, if any
    pub encoder_fault: Option<DriverError>,
    /// Button update error, if any
    pub button_fault: Option<DriverError>,
}

impl TickReport {
    /// True if any driver call failed this tick
    pub fn has_fault(&self) -> bool {
        self.keypad_fault.is_some() || self.encoder_fault.is_some() || self.button_fault.is_some()
    }

    /// True if nothing happened
    pub fn is_idle(&self) -> bool {
        self.sampled == 0 && self.dispatched == 0 && !self.has_fault()
    }
}

/// Owner of the input drivers and the event queue
///
/// `N` is the queue size; `N - 1` events can be pending.
pub struct Poller<K, E, B, const N: usize> {
    keypad: K,
    encoder: E,
    button: B,
    queue: EventQueue<N>,
    last_encoder_position: i32,
    dispatch_cap: usize,
}

impl<K, E, B, const N: usize> Poller<K, E, B, N>
where
    K: KeypadScanner,
    E: EncoderReader,
    B: ButtonDebouncer,
{
    /// Take ownership of the drivers and snapshot the encoder position
    pub fn new(keypad: K, mut encoder: E, button: B) -> Result<Self, DriverError> {
        let last_encoder_position = encoder.read()?;
        Ok(Self {
            keypad,
            encoder,
            button,
            queue: EventQueue::new(),
            last_encoder_position,
            dispatch_cap: MAX_DISPATCH_PER_TICK,
        })
    }

    /// Override the per-tick dispatch limit (at least 1)
    pub fn with_dispatch_cap(mut self, cap: usize) -> Self {
        self.dispatch_cap = cap.max(1);
        self
    }

    /// Run one tick: keypad, encoder, button, then one dispatch batch.
    ///
    /// Never blocks. A failing driver skips its own step only.
    pub fn tick<H: EventHandler>(&mut self, now_ms: u32, handler: &mut H) -> TickReport {
        let mut report = TickReport::default();

        match self.keypad.scan(now_ms) {
            Ok(Some(key)) => self.enqueue(Event::Key(key), &mut report),
            Ok(None) => {}
            Err(e) => report.keypad_fault = Some(e),
        }

        match self.encoder.read() {
            Ok(position) => {
                if let Some(event) = Event::from_encoder_delta(self.last_encoder_position, position)
                {
                    self.last_encoder_position = position;
                    self.enqueue(event, &mut report);
                }
            }
            Err(e) => report.encoder_fault = Some(e),
        }

        match self.button.update(now_ms) {
            Ok(()) => {
                if self.button.fell() {
                    self.enqueue(Event::EncBtn, &mut report);
                }
            }
            Err(e) => report.button_fault = Some(e),
        }

        report.dispatched = self.dispatch(handler);
        report
    }

    /// Pop and handle up to the dispatch cap. Returns the number handled.
    pub fn dispatch<H: EventHandler>(&mut self, handler: &mut H) -> usize {
        let mut handled = 0;
        while handled < self.dispatch_cap {
            let Some(event) = self.queue.pop() else {
                break;
            };
            handler.handle(event);
            handled += 1;
        }
        handled
    }

    fn enqueue(&mut self, event: Event, report: &mut TickReport) {
        report.sampled += 1;
        if !self.queue.push(event) {
            report.dropped += 1;
        }
    }
}

impl<K, E, B, const N: usize> Poller<K, E, B, N> {
    /// Pending events
    pub fn queue(&self) -> &EventQueue<N> {
        &self.queue
    }

    /// Pending events, mutable
    pub fn queue_mut(&mut self) -> &mut EventQueue<N> {
        &mut self.queue
    }

    /// Encoder position as of the last change
    pub fn last_encoder_position(&self) -> i32 {
        self.last_encoder_position
    }

    /// Per-tick dispatch limit
    pub fn dispatch_cap(&self) -> usize {
        self.dispatch_cap
    }

    /// Keypad driver
    pub fn keypad_mut(&mut self) -> &mut K {
        &mut self.keypad
    }

    /// Encoder driver
    pub fn encoder_mut(&mut self) -> &mut E {
        &mut self.encoder
    }

    /// Button driver
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct ScriptedKeypad {
        next: Option<char>,
        fail: bool,
    }

    impl KeypadScanner for ScriptedKeypad {
        fn scan(&mut self, _now_ms: u32) -> Result<Option<char>, DriverError> {
            if self.fail {
                return Err(DriverError::PinRead);
            }
            Ok(self.next.take())
        }
    }

    #[derive(Default)]
    struct ScriptedEncoder {
        position: i32,
        fail: bool,
    }

    impl EncoderReader for ScriptedEncoder {
        fn read(&mut self) -> Result<i32, DriverError> {
            if self.fail {
                return Err(DriverError::PinRead);
            }
            Ok(self.position)
        }
    }

    #[derive(Default)]
    struct ScriptedButton {
        pending_fall: bool,
        fell: bool,
    }

    impl ButtonDebouncer for ScriptedButton {
        fn update(&mut self, _now_ms: u32) -> Result<(), DriverError> {
            self.fell = core::mem::take(&mut self.pending_fall);
            Ok(())
        }

        fn fell(&self) -> bool {
            self.fell
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl EventHandler for Recorder {
        fn handle(&mut self, event: Event) {
            self.events.push(event);
        }
    }

    type TestPoller = Poller<ScriptedKeypad, ScriptedEncoder, ScriptedButton, 32>;

    fn poller() -> TestPoller {
        Poller::new(
            ScriptedKeypad::default(),
            ScriptedEncoder::default(),
            ScriptedButton::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_initial_position() {
        let encoder = ScriptedEncoder {
            position: 42,
            fail: false,
        };
        let p: TestPoller =
            Poller::new(ScriptedKeypad::default(), encoder, ScriptedButton::default()).unwrap();
        assert_eq!(p.last_encoder_position(), 42);
    }

    #[test]
    fn test_new_fails_without_encoder() {
        let encoder = ScriptedEncoder {
            position: 0,
            fail: true,
        };
        let p: Result<TestPoller, _> =
            Poller::new(ScriptedKeypad::default(), encoder, ScriptedButton::default());
        assert_eq!(p.err(), Some(DriverError::PinRead));
    }

    #[test]
    fn test_idle_tick() {
        let mut p = poller();
        let mut rec = Recorder::default();
        let report = p.tick(0, &mut rec);
        assert!(report.is_idle());
        assert!(rec.events.is_empty());
    }

    #[test]
    fn test_encoder_one_event_per_tick() {
        let mut p = poller();
        let mut rec = Recorder::default();

        p.encoder_mut().position = 5;
        let report = p.tick(0, &mut rec);
        assert_eq!(report.sampled, 1);
        assert_eq!(rec.events, [Event::EncRight]);
        assert_eq!(p.last_encoder_position(), 5);

        p.encoder_mut().position = -3;
        p.tick(5, &mut rec);
        assert_eq!(rec.events, [Event::EncRight, Event::EncLeft]);

        // Unchanged
        p.tick(10, &mut rec);
        assert_eq!(rec.events.len(), 2);
        assert_eq!(p.last_encoder_position(), -3);
    }

    #[test]
    fn test_encoder_wrap_is_signed_compare() {
        let mut p = poller();
        let mut rec = Recorder::default();
        p.encoder_mut().position = i32::MAX;
        p.tick(0, &mut rec);
        p.encoder_mut().position = i32::MIN;
        p.tick(5, &mut rec);
        assert_eq!(rec.events, [Event::EncRight, Event::EncLeft]);
    }

    #[test]
    fn test_button_fall_once() {
        let mut p = poller();
        let mut rec = Recorder::default();
        p.button_mut().pending_fall = true;
        p.tick(0, &mut rec);
        p.tick(5, &mut rec);
        assert_eq!(rec.events, [Event::EncBtn]);
    }

    #[test]
    fn test_sampling_order_in_one_tick() {
        let mut p = poller();
        let mut rec = Recorder::default();
        p.keypad_mut().next = Some('5');
        p.encoder_mut().position = 1;
        p.button_mut().pending_fall = true;

        let report = p.tick(0, &mut rec);
        assert_eq!(report.sampled, 3);
        assert_eq!(report.dispatched, 3);
        assert_eq!(rec.events, [Event::Key('5'), Event::EncRight, Event::EncBtn]);
        assert!(p.queue().is_empty());
    }

    #[test]
    fn test_dispatch_cap() {
        let mut p = poller();
        let mut rec = Recorder::default();
        let queued = [
            Event::Key('1'),
            Event::Key('2'),
            Event::EncLeft,
            Event::EncRight,
            Event::EncBtn,
        ];
        for e in queued {
            assert!(p.queue_mut().push(e));
        }

        let report = p.tick(0, &mut rec);
        assert_eq!(report.dispatched, 4);
        assert_eq!(rec.events, queued[..4]);
        assert_eq!(p.queue().len(), 1);
        assert_eq!(p.queue().peek(), Some(&Event::EncBtn));

        p.tick(5, &mut rec);
        assert_eq!(rec.events, queued);
    }

    #[test]
    fn test_custom_cap() {
        let mut p = poller().with_dispatch_cap(2);
        let mut rec = Recorder::default();
        for _ in 0..5 {
            p.queue_mut().push(Event::EncLeft);
        }
        assert_eq!(p.dispatch(&mut rec), 2);
        assert_eq!(p.queue().len(), 3);
        assert_eq!(poller().with_dispatch_cap(0).dispatch_cap(), 1);
    }

    #[test]
    fn test_backlog_drains_in_order() {
        let mut p = poller();
        let mut rec = Recorder::default();
        for i in 0..10u8 {
            p.queue_mut().push(Event::Key((b'1' + i % 9) as char));
        }
        let expected: Vec<Event> = p.queue().iter().copied().collect();
        let mut ticks = 0;
        while !p.queue().is_empty() {
            let report = p.tick(ticks * 5, &mut rec);
            assert!(report.dispatched <= 4);
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(rec.events, expected);
    }

    #[test]
    fn test_full_queue_drops() {
        let mut p = poller();
        let mut rec = Recorder::default();
        while p.queue_mut().push(Event::EncLeft) {}
        assert_eq!(p.queue().len(), 31);

        p.button_mut().pending_fall = true;
        // Dispatch runs after sampling, so the sampled event is dropped first
        let report = p.tick(0, &mut rec);
        assert_eq!(report.sampled, 1);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.dispatched, 4);
        assert!(p.queue().iter().all(|e| *e == Event::EncLeft));
    }

    #[test]
    fn test_driver_fault_skips_step() {
        let mut p = poller();
        let mut rec = Recorder::default();
        p.keypad_mut().fail = true;
        p.encoder_mut().position = 2;
        p.button_mut().pending_fall = true;

        let report = p.tick(0, &mut rec);
        assert_eq!(report.keypad_fault, Some(DriverError::PinRead));
        assert!(report.has_fault());
        assert_eq!(rec.events, [Event::EncRight, Event::EncBtn]);

        p.keypad_mut().fail = false;
        p.encoder_mut().fail = true;
        p.encoder_mut().position = 9;
        let report = p.tick(5, &mut rec);
        assert_eq!(report.encoder_fault, Some(DriverError::PinRead));
        assert_eq!(p.last_encoder_position(), 2);
    }

    #[test]
    fn test_report_counts_large_batches() {
        let mut p: Poller<ScriptedKeypad, ScriptedEncoder, ScriptedButton, 512> = Poller::new(
            ScriptedKeypad::default(),
            ScriptedEncoder::default(),
            ScriptedButton::default(),
        )
        .unwrap()
        .with_dispatch_cap(300);
        let mut rec = Recorder::default();
        for _ in 0..300 {
            assert!(p.queue_mut().push(Event::EncLeft));
        }

        let report = p.tick(0, &mut rec);
        assert_eq!(rec.events.len(), 300);
        assert_eq!(report.dispatched, 300);
    }
}
