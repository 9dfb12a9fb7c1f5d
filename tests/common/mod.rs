//! Simulated ATmega SPI peripheral with a register-file device behind it
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use atmega_spi_hal::device::{SPDR, SPSR};
use atmega_spi_hal::diag::ErrorSink;
use atmega_spi_hal::gpio::Bank;
use atmega_spi_hal::register::{Address, RegisterAccess};
use atmega_spi_hal::spi::spi_def::{SPIF, WCOL};
use atmega_spi_hal::time::Monotonic;

const MEMORY_SIZE: usize = 0x200;

/// Misbehaviour injected into one byte exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The peripheral raises WCOL
    Collision,
    /// The peripheral never raises a flag
    Stall,
}

/// One byte clocked through the data register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub mosi: u8,
    pub miso: u8,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Idle,
    Command,
    Writing(u8),
    Reading(u8),
}

struct State {
    memory: Vec<u8>,
    writes: Vec<(Address, u8)>,
    exchanges: Vec<Exchange>,
    faults: Vec<(usize, Fault)>,
    cs_port: Address,
    cs_mask: u8,
    device_registers: [u8; 128],
    device_invert_rw: bool,
    frame: Frame,
    rx: u8,
}

/// The SPI peripheral and GPIO banks of the device, plus a slave that
/// stores writes in a register file and answers reads from it.
pub struct SimulatedBus {
    state: RefCell<State>,
}

impl SimulatedBus {
    /// Slave selected by bit `pin` of `bank`
    pub fn new(bank: Bank, pin: u8) -> Self {
        SimulatedBus {
            state: RefCell::new(State {
                memory: vec![0; MEMORY_SIZE],
                writes: Vec::new(),
                exchanges: Vec::new(),
                faults: Vec::new(),
                cs_port: bank.port(),
                cs_mask: 1 << pin,
                device_registers: [0; 128],
                device_invert_rw: false,
                frame: Frame::Idle,
                rx: 0,
            }),
        }
    }

    /// Slave using the inverted read/write convention
    pub fn inverted(self) -> Self {
        self.state.borrow_mut().device_invert_rw = true;
        self
    }

    /// Make exchange number `index` (counted from 0) misbehave
    pub fn inject(&self, index: usize, fault: Fault) {
        self.state.borrow_mut().faults.push((index, fault));
    }

    /// Set a register without logging a write
    pub fn preset(&self, address: Address, value: u8) {
        self.state.borrow_mut().memory[address as usize] = value;
    }

    pub fn register(&self, address: Address) -> u8 {
        self.state.borrow().memory[address as usize]
    }

    pub fn writes(&self) -> Vec<(Address, u8)> {
        self.state.borrow().writes.clone()
    }

    pub fn writes_to(&self, address: Address) -> usize {
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|(a, _)| *a == address)
            .count()
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.state.borrow().exchanges.clone()
    }

    pub fn sent(&self) -> Vec<u8> {
        self.exchanges().iter().map(|e| e.mosi).collect()
    }

    pub fn clear_log(&self) {
        let mut state = self.state.borrow_mut();
        state.writes.clear();
        state.exchanges.clear();
    }

    /// Returns `true` if the chip-select line is driven low
    pub fn is_selected(&self) -> bool {
        let state = self.state.borrow();
        state.memory[state.cs_port as usize] & state.cs_mask == 0
    }

    pub fn device_register(&self, reg: u8) -> u8 {
        self.state.borrow().device_registers[reg as usize & 0x7F]
    }

    pub fn set_device_register(&self, reg: u8, value: u8) {
        self.state.borrow_mut().device_registers[reg as usize & 0x7F] = value;
    }
}

impl State {
    fn selected(&self) -> bool {
        self.memory[self.cs_port as usize] & self.cs_mask == 0
    }

    fn shift(&mut self, mosi: u8) -> u8 {
        if !self.selected() {
            return 0xFF;
        }
        match self.frame {
            Frame::Idle => 0xFF,
            Frame::Command => {
                let reg = mosi & 0x7F;
                let read = (mosi & 0x80 != 0) != self.device_invert_rw;
                self.frame = if read {
                    Frame::Reading(reg)
                } else {
                    Frame::Writing(reg)
                };
                0x00
            }
            Frame::Writing(reg) => {
                self.device_registers[reg as usize] = mosi;
                self.frame = Frame::Writing((reg + 1) & 0x7F);
                0x00
            }
            Frame::Reading(reg) => {
                self.frame = Frame::Reading((reg + 1) & 0x7F);
                self.device_registers[reg as usize]
            }
        }
    }

    fn exchange(&mut self, mosi: u8) {
        let index = self.exchanges.len();
        let fault = self
            .faults
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, fault)| *fault);
        let selected = self.selected();

        let miso = match fault {
            Some(Fault::Collision) => {
                self.memory[SPSR as usize] |= WCOL;
                0
            }
            Some(Fault::Stall) => 0,
            None => {
                let miso = self.shift(mosi);
                self.rx = miso;
                self.memory[SPSR as usize] |= SPIF;
                miso
            }
        };

        self.exchanges.push(Exchange {
            mosi,
            miso,
            selected,
        });
    }
}

impl RegisterAccess for SimulatedBus {
    fn read(&self, address: Address) -> u8 {
        let mut state = self.state.borrow_mut();
        if address == SPDR {
            state.memory[SPSR as usize] &= !(SPIF | WCOL);
            return state.rx;
        }
        state.memory[address as usize]
    }

    fn write(&self, address: Address, value: u8) {
        let mut state = self.state.borrow_mut();
        state.writes.push((address, value));
        if address == SPDR {
            state.exchange(value);
            return;
        }
        state.memory[address as usize] = value;
        if address == state.cs_port {
            if !state.selected() {
                state.frame = Frame::Idle;
            } else if state.frame == Frame::Idle {
                state.frame = Frame::Command;
            }
        }
    }
}

/// Microsecond counter advancing by one on every reading
pub struct TickTimer {
    now: Cell<u32>,
}

impl TickTimer {
    pub fn new() -> Self {
        TickTimer { now: Cell::new(0) }
    }

    /// Current time, without advancing the counter
    pub fn peek(&self) -> u32 {
        self.now.get()
    }
}

impl Monotonic for TickTimer {
    fn now_micros(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(1));
        now
    }
}

/// Sink collecting messages into a shared list
#[derive(Clone, Default)]
pub struct Messages(Rc<RefCell<Vec<String>>>);

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taken(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl ErrorSink for Messages {
    fn report(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}
