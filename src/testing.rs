use std::{
    cell::RefCell,
    task::{Poll, Waker},
};

use futures::future::poll_fn;
use reqwest::StatusCode;

use crate::{
    error::{Error, Result},
    models::pokemon::{PokemonDetail, PokemonSummary},
    source::PokemonSource,
};

pub fn summary(name: &str) -> PokemonSummary {
    PokemonSummary {
        name: name.into(),
        url: format!("https://pokeapi.test/api/v2/pokemon/{name}/"),
    }
}

pub fn detail(name: &str) -> PokemonDetail {
    PokemonDetail {
        name: name.into(),
        sprite_url: format!("https://img.test/{name}.png"),
        abilities: vec![format!("{name}-power"), "run-away".into()],
    }
}

/// In-memory stand-in for PokeAPI that records detail fetches.
pub struct FakeSource {
    names: Vec<String>,
    index_status: Option<StatusCode>,
    failing: Vec<String>,
    detail_calls: RefCell<Vec<String>>,
    gate: Option<usize>,
    waiting: RefCell<Vec<Waker>>,
}

impl FakeSource {
    pub fn with_index(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            index_status: None,
            failing: Vec::new(),
            detail_calls: RefCell::default(),
            gate: None,
            waiting: RefCell::default(),
        }
    }

    /// Detail fetches stay pending until `in_flight` of them have started.
    pub fn gated(mut self, in_flight: usize) -> Self {
        self.gate = Some(in_flight);
        self
    }

    pub fn index_status(mut self, status: u16) -> Self {
        self.index_status = StatusCode::from_u16(status).ok();
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.into());
        self
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.borrow().clone()
    }

    async fn pass_gate(&self) {
        let Some(in_flight) = self.gate else {
            return;
        };

        poll_fn(|cx| {
            if self.detail_calls.borrow().len() >= in_flight {
                for waker in self.waiting.borrow_mut().drain(..) {
                    waker.wake();
                }
                Poll::Ready(())
            } else {
                self.waiting.borrow_mut().push(cx.waker().clone());
                Poll::Pending
            }
        })
        .await
    }
}

impl PokemonSource for FakeSource {
    async fn fetch_index(&self) -> Result<Vec<PokemonSummary>> {
        if let Some(status) = self.index_status {
            return Err(Error::Fetch {
                url: "https://pokeapi.test/api/v2/pokemon/?limit=1000".into(),
                status,
            });
        }
        Ok(self.names.iter().map(|name| summary(name)).collect())
    }

    async fn fetch_detail(&self, summary: &PokemonSummary) -> Result<PokemonDetail> {
        self.detail_calls.borrow_mut().push(summary.name.clone());
        self.pass_gate().await;
        if self.failing.contains(&summary.name) {
            return Err(Error::Fetch {
                url: summary.url.clone(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(detail(&summary.name))
    }
}
