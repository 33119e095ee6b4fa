use crate::controller::{GameController, SessionSnapshot, normalize_guess};
use crate::error::GameError;
use crate::evaluator::Feedback;
use crate::session::RoundState;

/// Something the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Running totals for one play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

/// Front-end seam shared by the line-based CLI and the TUI.
pub trait GameInterface {
    fn display_round_start(&mut self, snapshot: &SessionSnapshot, round: usize);
    /// `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_feedback(&mut self, guess: &str, feedback: &Feedback, snapshot: &SessionSnapshot);
    fn display_rejection(&mut self, error: &GameError);
    fn display_round_over(&mut self, snapshot: &SessionSnapshot);
    fn display_exit_message(&mut self, tally: &RoundTally);
}

/// Drive rounds until the player exits.
pub fn game_loop<I: GameInterface + ?Sized>(
    controller: &mut GameController,
    interface: &mut I,
) -> RoundTally {
    let mut tally = RoundTally::default();
    interface.display_round_start(&controller.snapshot(), controller.rounds_started());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                let current = controller.snapshot();
                if current.state == RoundState::InProgress && current.attempts_used > 0 {
                    tally.abandoned += 1;
                }
                interface.display_exit_message(&tally);
                break;
            }
            UserAction::NewGame => {
                let previous = controller.snapshot();
                if let Err(e) = controller.new_round() {
                    interface.display_rejection(&e);
                    continue;
                }
                if previous.state == RoundState::InProgress && previous.attempts_used > 0 {
                    tally.abandoned += 1;
                }
                interface.display_round_start(&controller.snapshot(), controller.rounds_started());
            }
            UserAction::Guess(raw) => match controller.guess(&raw) {
                Ok((feedback, snapshot)) => {
                    let guess = normalize_guess(&raw);
                    interface.display_feedback(&guess, &feedback, &snapshot);
                    match snapshot.state {
                        RoundState::Won => {
                            tally.won += 1;
                            interface.display_round_over(&snapshot);
                        }
                        RoundState::Lost => {
                            tally.lost += 1;
                            interface.display_round_over(&snapshot);
                        }
                        RoundState::InProgress => {}
                    }
                }
                Err(e) => interface.display_rejection(&e),
            },
        }
    }

    tally
}
