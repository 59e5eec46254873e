use directories::UserDirs;

fn main() {
    if let Some(user_dirs) = UserDirs::new() {
        let config_dir = user_dirs.home_dir().join(".config/slt");
        let path = config_dir.join("config.json");
        if !path.exists() {
            let config = r#"{
  "spacex_base_url": "https://api.spacexdata.com"
}
"#;
            std::fs::create_dir_all(&config_dir).expect("Couldn't create a config");
            std::fs::write(path, config).expect("Couldn't create a config");
        }
    }
}
