fn main() -> std::io::Result<()> {
    textmend_lib::run()
}
