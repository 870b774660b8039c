//! Hand Evaluation Example
//!
//! Demonstrates how to classify poker hands and rank a showdown.

use showdown::{Card, PlayerCards, Suit, classify, compare, rank};

fn main() {
    env_logger::init();

    println!("=== Poker Hand Evaluation Example ===\n");

    // Example 1: Classify a single 7-card hand
    println!("Example 1: Classifying a 7-card hand");
    let hand = vec![
        Card(14, Suit::Heart), // Ace of Hearts
        Card(13, Suit::Heart), // King of Hearts
        Card(12, Suit::Heart), // Queen of Hearts
        Card(11, Suit::Heart), // Jack of Hearts
        Card(10, Suit::Heart), // Ten of Hearts
        Card(9, Suit::Spade),  // Nine of Spades
        Card(2, Suit::Club),   // Two of Clubs
    ];

    let classification = classify(&hand).expect("valid 7-card hand");
    println!("Hand: {:?}", hand);
    println!(
        "Classification: {}",
        serde_json::to_string_pretty(&classification).expect("serializable classification")
    );

    // Example 2: Compare two hands
    println!("\nExample 2: Comparing two hands");

    let hand_a = vec![
        Card(14, Suit::Spade), // Pair of Aces
        Card(14, Suit::Heart),
        Card(10, Suit::Club),
        Card(9, Suit::Diamond),
        Card(2, Suit::Spade),
    ];
    let hand_b = vec![
        Card(13, Suit::Spade), // Pair of Kings
        Card(13, Suit::Heart),
        Card(10, Suit::Club),
        Card(9, Suit::Diamond),
        Card(2, Suit::Spade),
    ];

    let class_a = classify(&hand_a).expect("valid hand");
    let class_b = classify(&hand_b).expect("valid hand");
    println!("Hand A: {:?} -> {:?}", hand_a, class_a);
    println!("Hand B: {:?} -> {:?}", hand_b, class_b);
    println!("compare(A, B) = {:?}", compare(&class_a, &class_b));

    // Example 3: A three player showdown with a split pot
    println!("\nExample 3: Three player showdown");

    let community = vec![
        Card(14, Suit::Spade),
        Card(13, Suit::Heart),
        Card(12, Suit::Club),
        Card(11, Suit::Diamond),
        Card(10, Suit::Spade),
    ];
    let players = vec![
        PlayerCards {
            id: "jim".into(),
            hole_cards: vec![Card(2, Suit::Heart), Card(3, Suit::Club)],
        },
        PlayerCards {
            id: "george".into(),
            hole_cards: vec![Card(2, Suit::Diamond), Card(3, Suit::Spade)],
        },
        PlayerCards {
            id: "matt".into(),
            hole_cards: vec![Card(4, Suit::Heart), Card(5, Suit::Club)],
        },
    ];

    println!("Community: {:?}", community);
    let groups = rank(&players, &community).expect("valid showdown");
    for (place, group) in groups.iter().enumerate() {
        let names: Vec<String> = group.iter().map(|id| id.to_string()).collect();
        println!("Place {}: {}", place + 1, names.join(", "));
    }

    println!("\n=== End of Hand Evaluation Example ===");
}
