use crate::controllers::viewer::command::ViewerCommand;
use winit::keyboard::KeyCode;

/// Physical-key bindings of the viewer.
///
/// Arrows pan, `=`/`-` zoom, Q/A nudge the constant's real part, W/S its
/// imaginary part, P reports the current parameters, Escape quits. Key
/// repeat is welcome: each repeat is one more discrete command.
#[must_use]
pub fn command_for_key(key_code: KeyCode) -> Option<ViewerCommand> {
    match key_code {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(ViewerCommand::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(ViewerCommand::ZoomOut),
        KeyCode::ArrowUp => Some(ViewerCommand::PanUp),
        KeyCode::ArrowDown => Some(ViewerCommand::PanDown),
        KeyCode::ArrowLeft => Some(ViewerCommand::PanLeft),
        KeyCode::ArrowRight => Some(ViewerCommand::PanRight),
        KeyCode::KeyQ => Some(ViewerCommand::ConstantRealUp),
        KeyCode::KeyA => Some(ViewerCommand::ConstantRealDown),
        KeyCode::KeyW => Some(ViewerCommand::ConstantImagUp),
        KeyCode::KeyS => Some(ViewerCommand::ConstantImagDown),
        KeyCode::KeyP => Some(ViewerCommand::Report),
        KeyCode::Escape => Some(ViewerCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_pan() {
        assert_eq!(
            command_for_key(KeyCode::ArrowUp),
            Some(ViewerCommand::PanUp)
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowDown),
            Some(ViewerCommand::PanDown)
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowLeft),
            Some(ViewerCommand::PanLeft)
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowRight),
            Some(ViewerCommand::PanRight)
        );
    }

    #[test]
    fn both_zoom_bindings_work() {
        assert_eq!(command_for_key(KeyCode::Equal), Some(ViewerCommand::ZoomIn));
        assert_eq!(
            command_for_key(KeyCode::NumpadAdd),
            Some(ViewerCommand::ZoomIn)
        );
        assert_eq!(
            command_for_key(KeyCode::Minus),
            Some(ViewerCommand::ZoomOut)
        );
        assert_eq!(
            command_for_key(KeyCode::NumpadSubtract),
            Some(ViewerCommand::ZoomOut)
        );
    }

    #[test]
    fn constant_nudges_map_to_qawsd_cluster() {
        assert_eq!(
            command_for_key(KeyCode::KeyQ),
            Some(ViewerCommand::ConstantRealUp)
        );
        assert_eq!(
            command_for_key(KeyCode::KeyA),
            Some(ViewerCommand::ConstantRealDown)
        );
        assert_eq!(
            command_for_key(KeyCode::KeyW),
            Some(ViewerCommand::ConstantImagUp)
        );
        assert_eq!(
            command_for_key(KeyCode::KeyS),
            Some(ViewerCommand::ConstantImagDown)
        );
    }

    #[test]
    fn report_and_quit() {
        assert_eq!(command_for_key(KeyCode::KeyP), Some(ViewerCommand::Report));
        assert_eq!(command_for_key(KeyCode::Escape), Some(ViewerCommand::Quit));
    }

    #[test]
    fn unbound_keys_produce_no_command() {
        assert_eq!(command_for_key(KeyCode::KeyZ), None);
        assert_eq!(command_for_key(KeyCode::Space), None);
        assert_eq!(command_for_key(KeyCode::F1), None);
    }
}
