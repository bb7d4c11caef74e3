mod bearer_gate;
mod login;
mod refresh;
mod signup;
