//! Controller shared between concurrent hosts
//!
//! Every request runs entirely inside one critical section, so state
//! mutation and the matching sink call are never interleaved with another
//! request.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::StripSink;
use crate::controller::LightController;
use crate::error::LightError;
use crate::request::{AccessoryRequest, AccessoryResponse, Characteristic, CharacteristicValue};

/// A [`LightController`] guarded by a critical section mutex.
pub struct SharedLightController<S: StripSink, const MAX_LEDS: usize> {
    inner: Mutex<RefCell<LightController<S, MAX_LEDS>>>,
}

impl<S: StripSink, const MAX_LEDS: usize> SharedLightController<S, MAX_LEDS> {
    pub const fn new(controller: LightController<S, MAX_LEDS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Panics if called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut LightController<S, MAX_LEDS>) -> R) -> R {
        critical_section::with(|cs| {
            let mut controller = self.inner.borrow(cs).borrow_mut();
            f(&mut controller)
        })
    }

    pub fn handle(&self, request: AccessoryRequest) -> Result<AccessoryResponse, LightError> {
        self.lock(|controller| controller.handle(request))
    }

    pub fn get(&self, characteristic: Characteristic) -> CharacteristicValue {
        self.lock(|controller| controller.get(characteristic))
    }

    pub fn set(&self, value: CharacteristicValue) -> Result<(), LightError> {
        self.lock(|controller| controller.set(value))
    }

    pub fn into_inner(self) -> LightController<S, MAX_LEDS> {
        self.inner.into_inner().into_inner()
    }
}
