use crate::utils::*;
use clap::Args;
use floodit_core as game;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Milliseconds between game-over checks.
const TICK_MILLIS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Click { x: game::Pixel, y: game::Pixel },
    Key(String),
    Tick,
    NewGame,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Cells per side
    #[arg(long, default_value_t = 14)]
    pub size: game::Coord,

    /// Number of colors in play
    #[arg(long, default_value_t = 6)]
    pub colors: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<String>,
}

impl GameProps {
    fn config(&self) -> game::Result<game::GameConfig> {
        let config = game::GameConfig::new(self.size, self.colors)?;
        config.validate_palette(&game::Color::PALETTE)?;
        Ok(config)
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    tile: game::SceneTile,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let game::SceneTile {
        rect, color, flooded, ..
    } = props.tile;
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; background: {};",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        color.css_name()
    );
    let class = classes!("cell", flooded.then_some("flooded"));

    html! {
        <div {class} {style}/>
    }
}

fn create_game(
    props: &GameProps,
    seed: u64,
) -> game::Result<game::GameController<game::RandomBoardGenerator>> {
    log::debug!("new game with seed {}", seed);
    game::GameController::from_seed(props.config()?, seed)
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::Result<game::GameController<game::RandomBoardGenerator>>,
    seed: u64,
    timer_interval: Option<Interval>,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_MILLIS, move || link.send_message(Msg::Tick))
    }

    fn initial_seed(props: &GameProps) -> u64 {
        props
            .seed
            .as_deref()
            .map_or_else(js_random_seed, seed_from_str)
    }

    fn new_game(&mut self, ctx: &Context<Self>) {
        self.seed = js_random_seed();
        self.game = create_game(ctx.props(), self.seed);
        self.timer_interval = Some(GameView::create_timer(ctx));
    }

    fn game_mut(&mut self) -> game::Result<&mut game::GameController<game::RandomBoardGenerator>> {
        self.game.as_mut().map_err(|err| *err)
    }

    fn apply(&mut self, ctx: &Context<Self>, msg: Msg) -> game::Result<game::Outcome> {
        use Msg::*;

        match msg {
            Click { x, y } => {
                log::debug!("click at ({}, {})", x, y);
                self.game_mut()?.click(x, y)
            }
            Key(key) => self.game_mut()?.key_pressed(&key),
            Tick => self.game_mut()?.tick(),
            NewGame => {
                self.new_game(ctx);
                Ok(game::Outcome::Reset)
            }
        }
    }

    fn view_board(&self, ctx: &Context<Self>, scene: &game::Scene, size: game::Coord) -> Html {
        let side = i32::from(size) * game::CELL_PIXELS;
        let style = format!("width: {side}px; height: {side}px;");
        let onclick = ctx.link().callback(|e: MouseEvent| Msg::Click {
            x: e.offset_x(),
            y: e.offset_y(),
        });

        html! {
            <div class="board" {style} {onclick}>
                { for scene.tiles.iter().map(|&tile| html! { <TileView {tile}/> }) }
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = Self::initial_seed(ctx.props());
        Self {
            game: create_game(ctx.props(), seed),
            seed,
            timer_interval: Some(GameView::create_timer(ctx)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.apply(ctx, msg) {
            Ok(outcome) => {
                if outcome.is_finished() {
                    // nothing is processed after the game ends
                    self.timer_interval = None;
                }
                outcome.has_update()
            }
            Err(game::GameError::AlreadyEnded) => false,
            Err(err) => {
                log::error!("rejected input: {}", err);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        let game = match &self.game {
            Ok(game) => game,
            Err(err) => {
                return html! {
                    <div class="floodit">
                        <p class="error">{format!("Cannot start game: {err}")}</p>
                    </div>
                };
            }
        };

        let scene = game.scene();
        let moves_left = format!("{} moves left", game.state().moves_left());
        let onkeydown = ctx
            .link()
            .callback(|e: KeyboardEvent| Msg::Key(e.key()));

        html! {
            <div class={classes!("floodit", scene.is_final().then_some("finished"))} tabindex="0" {onkeydown}>
                <nav>
                    <h1>{scene.title}</h1>
                    <aside title={moves_left}>{scene.counter.clone()}</aside>
                </nav>
                {
                    match scene.message {
                        Some(message) => html! {
                            <section class="game-over">
                                <p>{message}</p>
                                <button onclick={cb_new_game}>{"New game"}</button>
                            </section>
                        },
                        None => self.view_board(ctx, &scene, game.board().size()),
                    }
                }
                <footer>{format!("seed {}", self.seed)}</footer>
            </div>
        }
    }
}
