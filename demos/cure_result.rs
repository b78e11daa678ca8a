use cure_data::{Clustering, CureData, HierarchicalClustering, Point};

fn mean(points: &[&Point]) -> Point {
    let d = points.first().map_or(0, |p| p.len());
    let mut out = vec![0.0; d];
    for p in points {
        for (o, x) in out.iter_mut().zip(p.iter()) {
            *o += x;
        }
    }
    for o in &mut out {
        *o /= points.len() as f64;
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Two obvious groups in 2D.
    let data: Vec<Point> = vec![
        vec![0.0, 0.0],
        vec![0.4, 0.1],
        vec![0.1, 0.5],
        vec![10.0, 10.0],
        vec![10.3, 9.8],
        vec![9.7, 10.4],
    ];

    // Membership comes from an agglomerative run; representatives and means
    // are filled in the way a CURE producer would, one cluster at a time.
    let membership = HierarchicalClustering::new(2).process(&data)?;

    let mut result = CureData::new();
    for members in membership.into_clusters() {
        let points: Vec<&Point> = members.iter().map(|&i| &data[i]).collect();
        let center = mean(&points);
        // Shrink each member halfway toward the mean.
        let representatives: Vec<Point> = points
            .iter()
            .map(|p| p.iter().zip(&center).map(|(x, c)| c + 0.5 * (x - c)).collect())
            .collect();
        result.add_cluster(members, representatives, center)?;
    }
    result.validate()?;

    println!("clusters={}", result.n_clusters());
    for cluster in result.iter() {
        println!(
            "  cluster {}: members={:?} mean={:?} representatives={}",
            cluster.index,
            cluster.members.unwrap_or_default(),
            cluster.mean,
            cluster.representatives.len()
        );
    }
    println!("labels={:?}", result.to_labels(data.len())?);

    Ok(())
}
