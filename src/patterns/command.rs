//! Command: a `RemoteControl` triggers whatever `Command` is bound to its button,
//! without knowing the `Light` receiver behind it.

use crate::output::OutputSink;
use crate::{PatternError, PatternResult};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

pub trait Command {
    fn execute(&self, sink: &mut dyn OutputSink) -> PatternResult<()>;

    /// Short label used in logs
    fn name(&self) -> &str;
}

/// The receiver
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        self.on.set(true);
        sink.line("Light is on")?;
        Ok(())
    }

    pub fn turn_off(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        self.on.set(false);
        sink.line("Light is off")?;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

pub struct TurnOnLightCommand {
    light: Rc<Light>,
}

impl TurnOnLightCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for TurnOnLightCommand {
    fn execute(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        self.light.turn_on(sink)
    }

    fn name(&self) -> &str {
        "TurnOnLight"
    }
}

pub struct TurnOffLightCommand {
    light: Rc<Light>,
}

impl TurnOffLightCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for TurnOffLightCommand {
    fn execute(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        self.light.turn_off(sink)
    }

    fn name(&self) -> &str {
        "TurnOffLight"
    }
}

/// The invoker. Holds at most one command at a time.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `command` to the button, replacing any previous one
    pub fn set_command(&mut self, command: Box<dyn Command>) {
        debug!(command = command.name(), "command bound");
        self.command = Some(command);
    }

    /// Runs the bound command; [`PatternError::NoCommand`] if nothing is bound.
    pub fn press_button(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        let command = self.command.as_ref().ok_or(PatternError::NoCommand)?;
        command.execute(sink)
    }
}

/// Switches a living-room light on, then off, through one remote
pub fn run_demo(sink: &mut dyn OutputSink) -> PatternResult<()> {
    let living_room_light = Rc::new(Light::new());

    let turn_on_light = Box::new(TurnOnLightCommand::new(Rc::clone(&living_room_light)));
    let turn_off_light = Box::new(TurnOffLightCommand::new(Rc::clone(&living_room_light)));

    let mut remote = RemoteControl::new();

    remote.set_command(turn_on_light);
    remote.press_button(sink)?;

    remote.set_command(turn_off_light);
    remote.press_button(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;

    #[test]
    fn test_remote_control_switches_light() {
        let living_room_light = Rc::new(Light::new());
        let mut remote = RemoteControl::new();
        let mut sink = BufferSink::new();

        remote.set_command(Box::new(TurnOnLightCommand::new(Rc::clone(&living_room_light))));
        remote.press_button(&mut sink).unwrap();
        assert!(living_room_light.is_on());

        remote.set_command(Box::new(TurnOffLightCommand::new(Rc::clone(&living_room_light))));
        remote.press_button(&mut sink).unwrap();
        assert!(!living_room_light.is_on());

        assert_eq!(sink.lines(), ["Light is on", "Light is off"]);
    }

    #[test]
    fn test_press_without_command() {
        let remote = RemoteControl::new();
        let mut sink = BufferSink::new();

        let err = remote.press_button(&mut sink).unwrap_err();
        assert!(matches!(err, PatternError::NoCommand));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_command_can_be_pressed_repeatedly() {
        let light = Rc::new(Light::new());
        let mut remote = RemoteControl::new();
        let mut sink = BufferSink::new();

        remote.set_command(Box::new(TurnOnLightCommand::new(light)));
        remote.press_button(&mut sink).unwrap();
        remote.press_button(&mut sink).unwrap();

        assert_eq!(sink.lines().len(), 2);
    }
}
