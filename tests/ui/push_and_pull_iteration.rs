use light_bitfield::BitField;

fn main() {
    let field = BitField::from_slice(&[true, true, false, false, true]);

    let mut pushed = Vec::new();
    field.each(|bit| pushed.push(bit));

    let mut pull = field.iter();
    let mut pulled = Vec::new();
    while let Some(bit) = pull.next() {
        pulled.push(bit);
    }

    assert_eq!(pushed, [1, 1, 0, 0, 1]);
    assert_eq!(pulled, pushed);
    assert_eq!(field.iter().collect::<Vec<_>>(), pushed);

    let indices: Vec<usize> = field.indices().collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
    let ones: Vec<usize> = field.indices().zip(&field).filter(|(_, bit)| *bit == 1).map(|(idx, _)| idx).collect();
    assert_eq!(ones, [0, 1, 4]);
}
