/// Address the Android emulator uses to reach the host machine's loopback.
pub const EMULATOR_HOST_LOOPBACK: &str = "10.0.2.2";

pub const DEFAULT_ANDROID_URL: &str = "http://localhost:3004";

pub const IOS_SIMULATOR_COMMAND: &str =
    "open /Applications/Xcode.app/Contents/Developer/Applications/Simulator.app";

const USERNAME_PLACEHOLDER: &str = "<username>";
const DEVICE_PLACEHOLDER: &str = "device-name";

/// Textual substitution only; the input is not parsed as a URL.
pub fn rewrite_host_for_emulator(url: &str) -> String {
    url.replace("localhost", EMULATOR_HOST_LOOPBACK)
}

pub fn android_emulator_command(username: &str) -> String {
    let user = if username.trim().is_empty() {
        USERNAME_PLACEHOLDER
    } else {
        username.trim()
    };
    format!("cd /Users/{user}/Library/Android/sdk/emulator/")
}

pub fn list_devices_command() -> &'static str {
    "./emulator -list-avds"
}

pub fn run_device_command(device_name: &str) -> String {
    let device = if device_name.trim().is_empty() {
        DEVICE_PLACEHOLDER
    } else {
        device_name.trim()
    };
    format!("./emulator -avd \"{device}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_localhost() {
        assert_eq!(
            rewrite_host_for_emulator("http://localhost:3004/app"),
            "http://10.0.2.2:3004/app"
        );
        assert_eq!(
            rewrite_host_for_emulator("http://localhost:3004/?next=localhost"),
            "http://10.0.2.2:3004/?next=10.0.2.2"
        );
    }

    #[test]
    fn leaves_other_hosts_alone() {
        assert_eq!(
            rewrite_host_for_emulator("http://example.com"),
            "http://example.com"
        );
        assert_eq!(rewrite_host_for_emulator("not a url"), "not a url");
    }

    #[test]
    fn interpolates_username() {
        assert_eq!(
            android_emulator_command("jdoe"),
            "cd /Users/jdoe/Library/Android/sdk/emulator/"
        );
        assert_eq!(
            android_emulator_command(""),
            "cd /Users/<username>/Library/Android/sdk/emulator/"
        );
    }

    #[test]
    fn falls_back_to_device_placeholder() {
        assert_eq!(run_device_command(""), "./emulator -avd \"device-name\"");
        assert_eq!(run_device_command("Pixel_7"), "./emulator -avd \"Pixel_7\"");
    }
}
