use crate::utils::*;
use gloo::timers::callback::{Interval, Timeout};
use shellgame_core as game;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reset,
    Shake,
    Peek(game::Shell),
    SelectDifficulty(String),
    Tick,
    Lift,
    Lower,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
}

const fn difficulty_label(difficulty: game::Difficulty) -> &'static str {
    use game::Difficulty::*;
    match difficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
        Extreme => "Extreme",
    }
}

fn shell_classes(position: game::Slot, lifted: bool) -> Classes {
    classes!("shell", format!("pos-{}", position), lifted.then_some("lift"))
}

/// The lifted shell as drawn: the core's reveal, held back while the automatic peek is still waiting for its delay.
fn visible_reveal(revealed: Option<game::Reveal>, lift_pending: bool) -> Option<game::Reveal> {
    revealed.filter(|_| !lift_pending)
}

/// The marker is only drawn under a lifted shell that actually covers it.
fn marker_classes(lifted: Option<game::Reveal>) -> Classes {
    match lifted {
        Some(reveal) if reveal.has_marker => classes!("ball", format!("pos-{}", reveal.slot)),
        _ => classes!("ball", "is-hidden"),
    }
}

/// Inline override of the stylesheet transition while shells move, `None` leaves the stylesheet default.
fn transition_style(transition_ms: Option<u32>) -> Option<String> {
    transition_ms.map(|ms| format!("transition: all {}s ease", f64::from(ms) / 1000.))
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::ShellGame,
    lift_pending: bool,
    shuffle_timer: Option<Interval>,
    lift_timeout: Option<Timeout>,
    lower_timeout: Option<Timeout>,
}

impl GameView {
    fn show_reveal(&mut self, ctx: &Context<Self>, outcome: game::RevealOutcome) -> bool {
        let Some(reveal) = outcome.reveal() else {
            return false;
        };

        if let game::RevealOutcome::Guessed { won, .. } = outcome {
            log::info!("guess {}", if won { "won" } else { "lost" });
        }

        let delay = reveal.lift_delay_ms();
        self.lift_pending = delay > 0;
        self.lift_timeout = (delay > 0).then(|| {
            let link = ctx.link().clone();
            Timeout::new(delay, move || link.send_message(Msg::Lift))
        });

        let link = ctx.link().clone();
        self.lower_timeout = Some(Timeout::new(game::REVEAL_DISPLAY_MS, move || {
            link.send_message(Msg::Lower)
        }));
        true
    }

    fn start_shuffle(&mut self, ctx: &Context<Self>) -> bool {
        let game::ShakeOutcome::Started(profile) = self.game.shake() else {
            return false;
        };

        self.lift_pending = false;
        self.lift_timeout = None;
        self.lower_timeout = None;

        let link = ctx.link().clone();
        self.shuffle_timer = Some(Interval::new(profile.tick_interval_ms(), move || {
            link.send_message(Msg::Tick)
        }));
        true
    }

    fn advance_shuffle(&mut self) -> bool {
        let outcome = self.game.tick();
        if outcome.is_finished() {
            // dropping the interval cancels it
            self.shuffle_timer = None;
            log::debug!("shuffle timer released");
        }
        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut view = Self {
            game: game::ShellGame::new(ctx.props().seed),
            lift_pending: false,
            shuffle_timer: None,
            lift_timeout: None,
            lower_timeout: None,
        };
        let outcome = view.game.setup();
        view.show_reveal(ctx, outcome);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reset => {
                let outcome = self.game.setup();
                self.show_reveal(ctx, outcome)
            }
            Shake => self.start_shuffle(ctx),
            Peek(shell) => {
                let slot = self.game.slot_of(shell);
                log::debug!("peek at shell {} in slot {}", shell.number(), slot);
                let outcome = self.game.peak(Some(slot.number()));
                self.show_reveal(ctx, outcome)
            }
            SelectDifficulty(name) => {
                self.game.set_difficulty(&name);
                true
            }
            Tick => self.advance_shuffle(),
            Lift => {
                self.lift_timeout = None;
                std::mem::take(&mut self.lift_pending)
            }
            Lower => {
                self.lower_timeout = None;
                self.lift_pending = false;
                self.game.conceal()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let is_running = self.game.is_running();
        let score = self.game.score();
        let current = self.game.difficulty();
        let style = transition_style(self.game.transition_ms());
        let lifted = visible_reveal(self.game.revealed(), self.lift_pending);
        let lifted_slot = lifted.map(|reveal| reveal.slot);

        let cb_reset = ctx.link().callback(|_: MouseEvent| Reset);
        let cb_shake = ctx.link().callback(|_: MouseEvent| Shake);
        let cb_difficulty = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            SelectDifficulty(select.value())
        });

        html! {
            <div class="shellgame">
                <div class={classes!("board", is_running.then_some("moving"))}>
                    {
                        for game::Shell::ALL.into_iter().map(|shell| {
                            let position = self.game.slot_of(shell);
                            let class = shell_classes(position, lifted_slot == Some(position));
                            let onclick = ctx.link().callback(move |_: MouseEvent| Peek(shell));
                            html! {
                                <div id={format!("shell-{}", shell.number())} {class} style={style.clone()} {onclick}/>
                            }
                        })
                    }
                    <div id="ball" class={marker_classes(lifted)}/>
                </div>
                <nav>
                    <button id="reset" onclick={cb_reset}>{"Reset"}</button>
                    <button id="shake" onclick={cb_shake} disabled={is_running}>{"Shake"}</button>
                    <select id="difficulty" onchange={cb_difficulty}>
                        {
                            for game::Difficulty::ALL.into_iter().map(|difficulty| html! {
                                <option value={difficulty.name()} selected={difficulty == current}>
                                    {difficulty_label(difficulty)}
                                </option>
                            })
                        }
                    </select>
                </nav>
                <aside>
                    <span id="wins">{format_counter(score.wins(), "wins")}</span>
                    <span id="games">{format_counter(score.games(), "games")}</span>
                </aside>
            </div>
        }
    }
}
