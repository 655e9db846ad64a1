fn main() -> ructe::Result<()> {
    let mut r = ructe::Ructe::from_env()?;
    r.statics()?.add_files("static")?;
    r.compile_templates("templates")
}
