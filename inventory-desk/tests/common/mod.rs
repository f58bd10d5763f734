#![allow(dead_code)]

use async_trait::async_trait;
use desk_core::{DeskError, DeskResult};
use inventory_desk::models::{Ack, Lens, NewLens, StockIn};
use inventory_desk::services::InventoryApi;
use inventory_desk::InventoryDesk;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the inventory routes. Registered lenses get sequential ids.
pub struct FakeInventoryApi {
    pub lenses: Mutex<Vec<Lens>>,
    pub stock_ins: Mutex<Vec<StockIn>>,
    pub accept_writes: Mutex<bool>,
    pub list_fails: Mutex<bool>,
    pub list_calls: Mutex<usize>,
}

impl FakeInventoryApi {
    pub fn new() -> Self {
        Self {
            lenses: Mutex::new(Vec::new()),
            stock_ins: Mutex::new(Vec::new()),
            accept_writes: Mutex::new(true),
            list_fails: Mutex::new(false),
            list_calls: Mutex::new(0),
        }
    }

    pub fn with_lens(self, id: &str, name: &str) -> Self {
        self.lenses.lock().unwrap().push(Lens {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn reject_writes(&self) {
        *self.accept_writes.lock().unwrap() = false;
    }

    pub fn fail_listing(&self) {
        *self.list_fails.lock().unwrap() = true;
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl InventoryApi for FakeInventoryApi {
    async fn list_lenses(&self) -> DeskResult<Vec<Lens>> {
        *self.list_calls.lock().unwrap() += 1;
        if *self.list_fails.lock().unwrap() {
            return Err(DeskError::server("connection reset"));
        }
        Ok(self.lenses.lock().unwrap().clone())
    }

    async fn add_lens(&self, lens: &NewLens) -> DeskResult<Ack> {
        let success = *self.accept_writes.lock().unwrap();
        if success {
            let mut lenses = self.lenses.lock().unwrap();
            let id = (lenses.len() + 1).to_string();
            lenses.push(Lens {
                id,
                name: lens.name.clone(),
            });
        }
        Ok(Ack { success })
    }

    async fn stock_in(&self, request: &StockIn) -> DeskResult<Ack> {
        let success = *self.accept_writes.lock().unwrap();
        if success {
            self.stock_ins.lock().unwrap().push(request.clone());
        }
        Ok(Ack { success })
    }
}

pub struct TestDesk {
    pub desk: InventoryDesk,
    pub api: Arc<FakeInventoryApi>,
}

impl TestDesk {
    pub fn new(api: FakeInventoryApi) -> Self {
        let api = Arc::new(api);
        let desk = InventoryDesk::new(api.clone());
        Self { desk, api }
    }

    pub fn spawn() -> Self {
        Self::new(
            FakeInventoryApi::new()
                .with_lens("1", "Crizal Sapphire")
                .with_lens("2", "Kodak Blue"),
        )
    }
}
