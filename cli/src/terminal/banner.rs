use colored::*;

const BANNER: &str = r#"
           ███████╗███╗   ██╗██╗   ██╗███████╗████████╗
           ██╔════╝████╗  ██║██║   ██║██╔════╝╚══██╔══╝
           ███████╗██╔██╗ ██║██║   ██║█████╗     ██║
           ╚════██║██║╚██╗██║╚██╗ ██╔╝██╔══╝     ██║
           ███████║██║ ╚████║ ╚████╔╝ ███████╗   ██║
           ╚══════╝╚═╝  ╚═══╝  ╚═══╝  ╚══════╝   ╚═╝
"#;

pub fn print() {
    println!("{}", BANNER.bright_green());
}
