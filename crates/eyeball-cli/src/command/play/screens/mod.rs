pub mod game_over;
pub mod onboarding;
pub mod round;
