use core::cell::Cell;

use arduino_hal::pac::TC0;
use avr_device::interrupt::Mutex;
use scancore::{Clock, MicroSeconds, MilliSeconds};

// 16 MHz / 64 = 250 kHz, so one count is 4 µs and 250 counts is 1 ms.
const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = 250;
const MICROS_PER_COUNT: u32 = PRESCALER / 16;
const MILLIS_INCREMENT: u32 = PRESCALER * TIMER_COUNTS / 16_000;

static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Free-running time base on timer 0.
///
/// Timer 0 runs in CTC mode and interrupts once per millisecond. Both
/// counters wrap; consumers compare them with wrapping subtraction.
pub struct Timer0Clock {
    tc0: TC0,
}
impl Timer0Clock {
    /// Starts the timer.
    ///
    /// Interrupts must be enabled globally afterwards for the millisecond
    /// counter to advance.
    pub fn new(tc0: TC0) -> Self {
        tc0.tccr0a.write(|w| w.wgm0().ctc());
        tc0.ocr0a.write(|w| w.bits((TIMER_COUNTS - 1) as u8));
        tc0.tccr0b.write(|w| w.cs0().prescale_64());
        tc0.timsk0.write(|w| w.ocie0a().set_bit());

        avr_device::interrupt::free(|cs| {
            MILLIS_COUNTER.borrow(cs).set(0);
        });

        Self { tc0 }
    }
}

impl Clock for Timer0Clock {
    fn micros(&self) -> MicroSeconds {
        let (millis, counts) = avr_device::interrupt::free(|cs| {
            let mut millis = MILLIS_COUNTER.borrow(cs).get();
            let counts = self.tc0.tcnt0.read().bits() as u32;
            // The compare match may have happened after interrupts were
            // masked; the counter has then already restarted from zero.
            if self.tc0.tifr0.read().ocf0a().bit_is_set()
                && counts < TIMER_COUNTS - 1
            {
                millis = millis.wrapping_add(MILLIS_INCREMENT);
            }
            (millis, counts)
        });
        MicroSeconds::new(
            millis
                .wrapping_mul(1000)
                .wrapping_add(counts * MICROS_PER_COUNT),
        )
    }

    fn millis(&self) -> MilliSeconds {
        MilliSeconds::new(avr_device::interrupt::free(|cs| {
            MILLIS_COUNTER.borrow(cs).get()
        }))
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    avr_device::interrupt::free(|cs| {
        let counter_cell = MILLIS_COUNTER.borrow(cs);
        let counter = counter_cell.get();
        counter_cell.set(counter.wrapping_add(MILLIS_INCREMENT));
    })
}
