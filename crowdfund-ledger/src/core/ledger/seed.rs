use crate::core::campaign::Campaign;

/// Campaigns installed the first time a browser has no stored ledger.
pub fn seed_campaigns() -> Vec<Campaign> {
    [
        (
            "0x1234...",
            "Project Nebula: A Sci-Fi Game",
            "An open-world space exploration game built on decentralized principles.",
            50.0,
            35.5,
            "https://placehold.co/600x400/030913/0ea5e9?text=Nebula",
        ),
        (
            "0xabcd...",
            "Decentralized Art Gallery",
            "A virtual gallery for artists to showcase and sell their work as NFTs.",
            25.0,
            18.2,
            "https://placehold.co/600x400/030913/c026d3?text=Art+Gallery",
        ),
        (
            "0x9876...",
            "EcoChain: Carbon Tracker",
            "A transparent platform to track and trade carbon credits on the blockchain.",
            100.0,
            45.8,
            "https://placehold.co/600x400/030913/059669?text=EcoChain",
        ),
        (
            "0x4567...",
            "Quantum Leap Music Studio",
            "A decentralized record label where fans can invest in upcoming artists.",
            75.0,
            60.1,
            "https://placehold.co/600x400/030913/0ea5e9?text=Music+Studio",
        ),
        (
            "0xefgh...",
            "BioVerse Health Data",
            "Securely monetize your health data for research while maintaining privacy.",
            120.0,
            90.3,
            "https://placehold.co/600x400/030913/c026d3?text=BioVerse",
        ),
        (
            "0xijkl...",
            "Indie Film \"The Grid\"",
            "Fund the creation of a community-driven science fiction film.",
            40.0,
            15.7,
            "https://placehold.co/600x400/030913/059669?text=The+Grid",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, (owner, title, description, target, collected, image))| Campaign {
        id: id as u64,
        owner: owner.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        target,
        deadline: None,
        amount_collected: collected,
        image: image.to_string(),
        donators: Vec::new(),
    })
    .collect()
}
