fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only rerun if proto files change
    println!("cargo:rerun-if-changed=proto/amadeus/common.proto");
    println!("cargo:rerun-if-changed=proto/amadeus/types.proto");
    println!("cargo:rerun-if-changed=proto/amadeus/service.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/amadeus/common.proto",
                "proto/amadeus/types.proto",
                "proto/amadeus/service.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}
