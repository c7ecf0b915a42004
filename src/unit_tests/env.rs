use std::sync::{LockResult, Mutex, MutexGuard, RwLock};

use futures::channel::mpsc::Receiver;
use lazy_static::lazy_static;

use crate::{
    constants::RUNTIME_EVENTS_BUFFER,
    models::{ctx::Ctx, player::Player, playlist::Playlist},
    runtime::{
        msg::{Action, ActionPlayer, ActionPlaylist, Event, Msg},
        Effect, Effects, Env, Model, Runtime, RuntimeAction, RuntimeEvent, UpdateWithCtx,
    },
    types::default_catalog,
};

lazy_static! {
    pub static ref NEXT_ID: RwLock<usize> = RwLock::new(0);
    static ref ENV_MUTEX: Mutex<()> = Default::default();
}

pub enum TestEnv {}

impl TestEnv {
    /// Resets the id counter and returns a guard that must be held for the
    /// whole test, since the counter is shared.
    pub fn reset() -> LockResult<MutexGuard<'static, ()>> {
        let env_mutex = ENV_MUTEX.lock();
        *NEXT_ID.write().unwrap() = 0;
        env_mutex
    }
}

impl Env for TestEnv {
    fn new_id() -> String {
        let mut next_id = NEXT_ID.write().unwrap();
        *next_id += 1;
        format!("video_{}", next_id)
    }
}

#[derive(crate::Model, Clone, Debug)]
#[model(TestEnv)]
pub struct TestModel {
    pub ctx: Ctx,
    pub player: Player,
    pub playlist: Playlist,
}

impl TestModel {
    pub fn new() -> (Self, Vec<Effect>) {
        let ctx = Ctx::new(default_catalog::<TestEnv>());
        let (player, player_effects) = Player::new(&ctx);
        let playlist = Playlist::new(&ctx.catalog);
        (
            TestModel {
                ctx,
                player,
                playlist,
            },
            player_effects.into_iter().collect(),
        )
    }
}

pub fn test_runtime() -> (
    Runtime<TestEnv, TestModel>,
    Receiver<RuntimeEvent<TestEnv, TestModel>>,
) {
    let (model, effects) = TestModel::new();
    Runtime::<TestEnv, _>::new(model, effects, RUNTIME_EVENTS_BUFFER)
}

/// Drains every event emitted so far, keeping only core events.
pub fn core_events<M: Model<TestEnv>>(rx: &mut Receiver<RuntimeEvent<TestEnv, M>>) -> Vec<Event> {
    let mut events = vec![];
    while let Ok(Some(event)) = rx.try_next() {
        if let RuntimeEvent::CoreEvent(event) = event {
            events.push(event);
        }
    }
    events
}

/// Drains every event emitted so far, keeping only changed fields.
pub fn new_states<M: Model<TestEnv>>(
    rx: &mut Receiver<RuntimeEvent<TestEnv, M>>,
) -> Vec<M::Field> {
    let mut fields = vec![];
    while let Ok(Some(event)) = rx.try_next() {
        if let RuntimeEvent::NewState(new_fields) = event {
            fields.extend(new_fields);
        }
    }
    fields
}

/// Collects the events carried by `effects`, dropping internal messages.
pub fn effect_events(effects: Effects) -> Vec<Event> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Msg(msg) => match *msg {
                Msg::Event(event) => Some(event),
                _ => None,
            },
        })
        .collect()
}

pub fn update_player(player: &mut Player, ctx: &Ctx, action: ActionPlayer) -> Effects {
    UpdateWithCtx::<TestEnv>::update(player, &Msg::Action(Action::Player(action)), ctx)
}

pub fn update_playlist(playlist: &mut Playlist, ctx: &Ctx, action: ActionPlaylist) -> Effects {
    UpdateWithCtx::<TestEnv>::update(playlist, &Msg::Action(Action::Playlist(action)), ctx)
}

/// A context with the default catalog and a player bound to its first video.
pub fn bound_player() -> (Ctx, Player) {
    let ctx = Ctx::new(default_catalog::<TestEnv>());
    let (player, _) = Player::new(&ctx);
    (ctx, player)
}

pub fn dispatch(runtime: &Runtime<TestEnv, TestModel>, action: Action) {
    runtime.dispatch(RuntimeAction {
        field: None,
        action,
    });
}
